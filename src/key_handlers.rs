use crate::app::{submit_task, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Key handling for the chat screen. While a request is outstanding the
/// input is disabled, so Enter and typing are no-ops until it settles.
pub async fn handle_chat_key(app_arc: Arc<Mutex<App>>, key: KeyEvent) {
    let mut app = app_arc.lock().await;
    match key.code {
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => {
            if app.controller.busy || app.input.trim().is_empty() {
                return;
            }
            let text = app.take_input();
            drop(app);
            tokio::spawn(submit_task(app_arc.clone(), text));
        }
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            if !app.controller.busy {
                app.input.pop();
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else if !app.controller.busy {
                app.input.push(c);
            }
        }
        _ => {}
    }
}
