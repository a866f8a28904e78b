//! Session struct and conversation history.

use crate::{Message, Role};

use super::prompt::build_system_prompt;

/// A conversation with one seed system message followed by turns.
///
/// Append-only: messages are never reordered, removed or deduplicated.
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) messages: Vec<Message>,
}

impl Session {
    /// Start a session seeded with the system message for `manual_text`.
    pub fn new(manual_text: &str) -> Self {
        Self {
            messages: vec![Message::system(build_system_prompt(manual_text))],
        }
    }

    /// Append a message as-is. Role and content are not validated.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The full conversation history, seed message included.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Everything after the seed message: what a transcript shows.
    pub fn visible(&self) -> &[Message] {
        match self.messages.first() {
            Some(first) if first.role == Role::System => &self.messages[1..],
            _ => &self.messages,
        }
    }

    /// Number of messages in history, seed included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
