use crate::{
    api::{BotReply, ChatApi},
    constants::{PENDING_TEXT, TRANSPORT_FAILURE_TEXT, WELCOME_TEXT},
    errors::ChatResult,
    models::{Message, MessageId, Transcript},
};

/// Rendering seam between the controller and whatever draws the
/// transcript. The terminal frontend only tracks scroll/focus hints
/// here; tests substitute a recording fake.
pub trait TranscriptRenderer {
    fn append_message(&mut self, id: MessageId, message: &Message);
    fn update_message(&mut self, id: MessageId, message: &Message);
    fn focus_input(&mut self);
}

/// Owns the transcript and the single busy gate. Constructed once per
/// session; there is deliberately no way to submit while a request is
/// outstanding and no way to remove transcript entries.
pub struct ChatController<A, R> {
    pub transcript: Transcript,
    pub busy: bool,
    pub api: A,
    pub renderer: R,
}

impl<A: ChatApi, R: TranscriptRenderer> ChatController<A, R> {
    pub fn new(api: A, renderer: R) -> Self {
        ChatController {
            transcript: Transcript::new(),
            busy: false,
            api,
            renderer,
        }
    }

    /// Greets an empty transcript. Refreshing the page re-showed this in
    /// the original widget; here it fires once at startup.
    pub fn show_welcome(&mut self) {
        if !self.transcript.is_empty() {
            return;
        }
        let message = Message::bot(WELCOME_TEXT);
        let id = self.transcript.push(message.clone());
        self.renderer.append_message(id, &message);
    }

    /// First half of a submission: appends the user message and the
    /// pending placeholder and raises the busy gate. Returns `None` for
    /// blank input or while a request is already outstanding, in which
    /// case the transcript is untouched and no request may be issued.
    pub fn begin(&mut self, raw_text: &str) -> Option<MessageId> {
        let text = raw_text.trim();
        if text.is_empty() || self.busy {
            return None;
        }

        let user = Message::user(text);
        let user_id = self.transcript.push(user.clone());
        self.renderer.append_message(user_id, &user);

        let placeholder = Message::pending_bot(PENDING_TEXT);
        let placeholder_id = self.transcript.push(placeholder.clone());
        self.renderer.append_message(placeholder_id, &placeholder);

        self.busy = true;
        Some(placeholder_id)
    }

    /// Second half: resolves the placeholder from the outcome. Runs for
    /// success, rejection and transport failure alike, so the busy gate
    /// is always lowered and focus always returns to the input.
    pub fn settle(&mut self, placeholder: MessageId, outcome: ChatResult<BotReply>) {
        let text = match outcome {
            Ok(BotReply::Reply(text)) => text,
            Ok(BotReply::Rejected(text)) => text,
            Err(err) => {
                log::error!("chat request failed: {err}");
                TRANSPORT_FAILURE_TEXT.to_string()
            }
        };

        self.transcript.resolve(placeholder, text);
        if let Some(message) = self.transcript.get(placeholder) {
            let message = message.clone();
            self.renderer.update_message(placeholder, &message);
        }

        self.busy = false;
        self.renderer.focus_input();
    }

    /// One whole submission as a single async operation. The terminal
    /// frontend drives `begin`/`settle` separately so it can keep drawing
    /// while the request is in flight; the semantics are identical.
    pub async fn submit(&mut self, raw_text: &str) {
        let Some(placeholder) = self.begin(raw_text) else {
            return;
        };
        let outcome = self.api.send(raw_text.trim()).await;
        self.settle(placeholder, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GENERIC_FAILURE_TEXT;
    use crate::errors::ChatError;
    use crate::models::Author;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeRenderer {
        appended: Vec<Message>,
        updated: Vec<Message>,
        focus_calls: usize,
    }

    impl TranscriptRenderer for FakeRenderer {
        fn append_message(&mut self, _id: MessageId, message: &Message) {
            self.appended.push(message.clone());
        }

        fn update_message(&mut self, _id: MessageId, message: &Message) {
            self.updated.push(message.clone());
        }

        fn focus_input(&mut self) {
            self.focus_calls += 1;
        }
    }

    #[derive(Default)]
    struct ScriptedApi {
        replies: Mutex<VecDeque<ChatResult<BotReply>>>,
        calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn with_replies(replies: Vec<ChatResult<BotReply>>) -> Self {
            ScriptedApi {
                replies: Mutex::new(replies.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ChatApi for ScriptedApi {
        async fn send(&self, _message: &str) -> ChatResult<BotReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted reply left")
        }
    }

    fn controller(
        replies: Vec<ChatResult<BotReply>>,
    ) -> ChatController<ScriptedApi, FakeRenderer> {
        ChatController::new(ScriptedApi::with_replies(replies), FakeRenderer::default())
    }

    #[tokio::test]
    async fn whitespace_submit_is_a_no_op() {
        let mut ctl = controller(vec![]);
        ctl.submit("   \t  ").await;

        assert_eq!(ctl.transcript.len(), 0);
        assert_eq!(ctl.api.calls(), 0);
        assert!(ctl.renderer.appended.is_empty());
        assert!(!ctl.busy);
    }

    #[tokio::test]
    async fn submit_appends_user_message_and_placeholder() {
        let mut ctl = controller(vec![Ok(BotReply::Reply("done".into()))]);
        ctl.submit("  what is john doing  ").await;

        assert_eq!(ctl.transcript.len(), 2);
        let appended = &ctl.renderer.appended;
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].author, Author::User);
        assert_eq!(appended[0].text, "what is john doing");
        assert_eq!(appended[1].author, Author::Bot);
        assert!(appended[1].pending);
        assert_eq!(appended[1].text, PENDING_TEXT);
    }

    #[test]
    fn busy_gate_blocks_a_second_begin_until_settle() {
        let mut ctl = controller(vec![]);
        let placeholder = ctl.begin("first").unwrap();
        assert!(ctl.busy);
        assert!(ctl.begin("second").is_none());
        assert_eq!(ctl.transcript.len(), 2);

        ctl.settle(placeholder, Ok(BotReply::Reply("ok".into())));
        assert!(!ctl.busy);
        assert_eq!(ctl.renderer.focus_calls, 1);
        assert!(ctl.begin("second").is_some());
    }

    #[tokio::test]
    async fn success_reply_replaces_placeholder_text() {
        let mut ctl = controller(vec![Ok(BotReply::Reply("X".into()))]);
        ctl.submit("ping").await;

        let bot = &ctl.transcript.messages()[1];
        assert_eq!(bot.text, "X");
        assert!(!bot.pending);
        assert_eq!(ctl.renderer.updated.len(), 1);
        assert_eq!(ctl.renderer.updated[0].text, "X");
    }

    #[tokio::test]
    async fn rejection_renders_server_text() {
        let mut ctl = controller(vec![Ok(BotReply::Rejected("bad request".into()))]);
        ctl.submit("????").await;

        assert_eq!(ctl.transcript.messages()[1].text, "bad request");
        assert!(!ctl.busy);
    }

    #[tokio::test]
    async fn joined_errors_come_through_as_rejection_text() {
        // decode_reply turns {"errors": ["a","b"]} into this rejection.
        let mut ctl = controller(vec![Ok(BotReply::Rejected("a, b".into()))]);
        ctl.submit("query").await;

        assert_eq!(ctl.transcript.messages()[1].text, "a, b");
    }

    #[tokio::test]
    async fn transport_failure_renders_generic_text_and_clears_busy() {
        let mut ctl = controller(vec![Err(ChatError::api_error("connection refused"))]);
        ctl.submit("hello").await;

        let bot = &ctl.transcript.messages()[1];
        assert_eq!(bot.text, TRANSPORT_FAILURE_TEXT);
        assert_ne!(bot.text, GENERIC_FAILURE_TEXT);
        assert!(!bot.pending);
        assert!(!ctl.busy);
        assert_eq!(ctl.renderer.focus_calls, 1);
    }

    #[tokio::test]
    async fn duplicate_submissions_are_not_deduplicated() {
        let mut ctl = controller(vec![
            Ok(BotReply::Reply("first".into())),
            Ok(BotReply::Reply("second".into())),
        ]);
        ctl.submit("status?").await;
        ctl.submit("status?").await;

        assert_eq!(ctl.transcript.len(), 4);
        assert_eq!(ctl.api.calls(), 2);
        assert_eq!(ctl.transcript.messages()[1].text, "first");
        assert_eq!(ctl.transcript.messages()[3].text, "second");
    }

    #[test]
    fn welcome_only_fires_on_an_empty_transcript() {
        let mut ctl = controller(vec![]);
        ctl.show_welcome();
        assert_eq!(ctl.transcript.len(), 1);
        assert_eq!(ctl.transcript.messages()[0].author, Author::Bot);

        ctl.show_welcome();
        assert_eq!(ctl.transcript.len(), 1);
    }
}
