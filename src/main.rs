use anyhow::Result;
use teamchat::{config, logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    config::initialize_config()?;
    logging::init_logging()?;
    ui::run_ui().await
}
