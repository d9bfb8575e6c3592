// src/logging.rs

use crate::config::get_config;
use crate::errors::{ChatError, ChatResult};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

pub const LOG_FILE: &str = "teamchat.log";

/// Routes the `log` macros to an append-only file. Stderr would corrupt
/// the alternate screen, so nothing is ever written to the terminal.
pub fn init_logging() -> ChatResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    let level = get_config().log_level;
    Builder::from_env(Env::default().default_filter_or(&level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| ChatError::config_error(format!("failed to install logger: {e}")))?;

    Ok(())
}
