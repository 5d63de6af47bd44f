//! Append-only conversation transcript.

use super::message::ConversationMessage;
use serde::{Deserialize, Serialize};

/// The ordered sequence of conversation messages.
///
/// Append-only: messages are never reordered, mutated, or deleted, so
/// append order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ConversationMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message at the end of the transcript.
    pub fn push(&mut self, message: ConversationMessage) {
        self.messages.push(message);
    }

    /// All messages, in append (= display) order.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }
}
