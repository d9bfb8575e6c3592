// src/models.rs

use chrono::{DateTime, Local};

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// A single transcript entry. The only mutation a message ever sees is
/// its pending placeholder text being replaced when the reply settles.
#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub author: Author,
    pub pending: bool,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            author: Author::User,
            pending: false,
            timestamp: Local::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            author: Author::Bot,
            pending: false,
            timestamp: Local::now(),
        }
    }

    /// Placeholder shown while the corresponding request is in flight.
    pub fn pending_bot(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            author: Author::Bot,
            pending: true,
            timestamp: Local::now(),
        }
    }
}

/// Stable handle to a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageId(pub(crate) usize);

/// Ordered, append-only list of messages for one session. There is no
/// removal API on purpose; entries live until the program exits.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript::default()
    }

    pub fn push(&mut self, message: Message) -> MessageId {
        self.messages.push(message);
        MessageId(self.messages.len() - 1)
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(id.0)
    }

    /// Replaces the text of a pending entry and marks it resolved.
    pub fn resolve(&mut self, id: MessageId, text: impl Into<String>) {
        if let Some(message) = self.messages.get_mut(id.0) {
            message.text = text.into();
            message.pending = false;
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
