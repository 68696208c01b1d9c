//! Client-side conversation history.

use crate::Message;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prior turns replayed into a chat request.
///
/// A conversation belongs to one session. Callers own it and lend it to the
/// client mutably for the duration of a call, so two sessions never see each
/// other's history.
///
/// # Examples
///
/// ```
/// use grok_core::Conversation;
///
/// let mut conversation = Conversation::new();
/// conversation.record_turn("What is 2+2?", "4");
/// assert_eq!(conversation.len(), 2);
///
/// conversation.clear();
/// assert!(conversation.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were exchanged.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a completed user/assistant exchange.
    pub fn record_turn(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.messages.push(Message::user(prompt));
        self.messages.push(Message::assistant(reply));
        debug!(messages = self.messages.len(), "Recorded conversation turn");
    }

    /// Forgets every stored message.
    pub fn clear(&mut self) {
        if !self.messages.is_empty() {
            debug!(dropped = self.messages.len(), "Clearing conversation");
        }
        self.messages.clear();
    }
}
