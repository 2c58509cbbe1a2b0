//! Chat message types.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Delivery state of a message, making the optimistic append explicit.
///
/// A user message is appended as `Pending` before the network round trip,
/// then either upgraded to `Confirmed` when the exchange completes or marked
/// `Unconfirmed` when it fails. Assistant messages are always `Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Pending,
    #[default]
    Confirmed,
    Unconfirmed,
}

/// A single message in a conversation thread.
///
/// Immutable once created, except for the delivery-state upgrade; messages
/// are appended-only to their owning thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    /// Creation time (RFC 3339)
    pub timestamp: String,
    #[serde(default)]
    pub delivery: Delivery,
}

impl Message {
    fn new(content: impl Into<String>, sender: Sender, delivery: Delivery) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: chrono::Utc::now().to_rfc3339(),
            delivery,
        }
    }

    /// A user-authored message, pending until the exchange completes.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Sender::User, Delivery::Pending)
    }

    /// An assistant-authored message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, Sender::Assistant, Delivery::Confirmed)
    }

    /// A historical message rebuilt from the remote store, with its original
    /// timestamp.
    pub fn from_history(
        content: impl Into<String>,
        sender: Sender,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: timestamp.into(),
            delivery: Delivery::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_starts_pending() {
        let message = Message::user("hello");
        assert_eq!(message.sender, Sender::User);
        assert_eq!(message.delivery, Delivery::Pending);
        assert!(!message.id.is_empty());
    }

    #[test]
    fn test_assistant_message_is_confirmed() {
        let message = Message::assistant("hi there");
        assert_eq!(message.sender, Sender::Assistant);
        assert_eq!(message.delivery, Delivery::Confirmed);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }
}
