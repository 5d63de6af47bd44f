//! Conversation session types.

mod message;
mod transcript;

pub use message::{ConversationMessage, MessageAuthor};
pub use transcript::Transcript;
