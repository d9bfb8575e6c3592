use crate::{
    api::{BotReply, ChatApi, HttpChatApi},
    config::get_config,
    controller::{ChatController, TranscriptRenderer},
    errors::ChatResult,
    log_view::LogView,
    models::{Message, MessageId},
    status_indicator::StatusIndicator,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Renderer hints for the terminal frontend. The transcript itself is
/// redrawn from the controller every frame; all the renderer has to
/// remember is whether the view should stick to the bottom and whether
/// the input line owns the cursor.
#[derive(Debug)]
pub struct TuiRenderer {
    pub follow_transcript: bool,
    pub input_focused: bool,
}

impl Default for TuiRenderer {
    fn default() -> Self {
        TuiRenderer {
            follow_transcript: true,
            input_focused: true,
        }
    }
}

impl TranscriptRenderer for TuiRenderer {
    fn append_message(&mut self, _id: MessageId, _message: &Message) {
        self.follow_transcript = true;
    }

    fn update_message(&mut self, _id: MessageId, _message: &Message) {
        self.follow_transcript = true;
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }
}

pub struct App {
    pub controller: ChatController<HttpChatApi, TuiRenderer>,
    pub input: String,
    pub chat_scroll: u16,
    pub logs: LogView,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> ChatResult<App> {
        let config = get_config();
        let api = HttpChatApi::from_config(&config)?;
        let mut controller = ChatController::new(api, TuiRenderer::default());
        if config.show_welcome {
            controller.show_welcome();
        }

        let mut logs = LogView::new();
        logs.add(format!("connected to {}", config.base_url));

        Ok(App {
            controller,
            input: String::new(),
            chat_scroll: 0,
            logs,
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        })
    }

    pub fn take_input(&mut self) -> String {
        self.input.drain(..).collect()
    }

    pub fn scroll_up(&mut self) {
        self.controller.renderer.follow_transcript = false;
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }
}

/// One submission, driven off the shared app handle so the draw loop
/// keeps running while the request is in flight. The lock is never held
/// across the network await.
pub async fn submit_task(app: Arc<Mutex<App>>, raw_text: String) {
    let (placeholder, api) = {
        let mut guard = app.lock().await;
        let Some(placeholder) = guard.controller.begin(&raw_text) else {
            return;
        };
        guard.controller.renderer.input_focused = false;
        guard.status_indicator.set_busy(true);
        guard.status_indicator.set_status("Contacting tracker…");
        guard
            .logs
            .add(format!("sending message ({} chars)", raw_text.trim().len()));
        (placeholder, guard.controller.api.clone())
    };

    let outcome = api.send(raw_text.trim()).await;

    let mut guard = app.lock().await;
    match &outcome {
        Ok(BotReply::Reply(_)) => guard.logs.add("reply received"),
        Ok(BotReply::Rejected(text)) => guard.logs.add(format!("request rejected: {text}")),
        Err(err) => guard.logs.add(format!("request failed: {err}")),
    }
    guard.controller.settle(placeholder, outcome);
    guard.status_indicator.set_busy(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_input_clears_the_buffer() {
        let mut app = App {
            controller: ChatController::new(
                HttpChatApi::new("http://127.0.0.1:8000", std::time::Duration::from_secs(1))
                    .unwrap(),
                TuiRenderer::default(),
            ),
            input: "  hello there  ".to_string(),
            chat_scroll: 0,
            logs: LogView::new(),
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        };

        assert_eq!(app.take_input(), "  hello there  ");
        assert!(app.input.is_empty());
    }
}
