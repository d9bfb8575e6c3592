// src/ui.rs

use crate::{app::App, chat_view::draw_chat, key_handlers::handle_chat_key};
use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, Mutex};

enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI for one chat session.
pub async fn run_ui() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new()?));
    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: Arc<Mutex<App>>) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Input reader + tick producer, decoupled from the draw loop.
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(250) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let mut guard = app.lock().await;
            terminal.draw(|f| draw_chat(f, &mut guard))?;
            if guard.should_quit {
                break;
            }
        }

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => handle_chat_key(app.clone(), key).await,
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => app.lock().await.status_indicator.tick(),
            None => break,
        }
    }

    Ok(())
}
