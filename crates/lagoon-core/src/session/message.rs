//! Conversation message types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the author of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageAuthor {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

/// A single message in the conversation transcript.
///
/// Messages are immutable after creation. System notices (permission
/// problems and similar) are assistant-authored but carry a flag so the
/// renderer can distinguish them from the regular assistant tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// The body text of the message
    pub content: String,
    /// Who authored the message
    pub author: MessageAuthor,
    /// Timestamp when the message was created (ISO 8601 format)
    pub timestamp: String,
    /// True for visually distinguished system notices
    #[serde(default)]
    pub system_notice: bool,
}

impl ConversationMessage {
    fn new(content: impl Into<String>, author: MessageAuthor, system_notice: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            author,
            timestamp: chrono::Utc::now().to_rfc3339(),
            system_notice,
        }
    }

    /// Creates a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, MessageAuthor::User, false)
    }

    /// Creates an assistant-authored message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, MessageAuthor::Assistant, false)
    }

    /// Creates a system notice, rendered apart from the assistant tone.
    pub fn notice(content: impl Into<String>) -> Self {
        Self::new(content, MessageAuthor::Assistant, true)
    }
}
