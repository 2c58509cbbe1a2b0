//! Conversation thread domain model.
//!
//! A thread is one continuous conversation, addressed by a composite id of
//! its context and creation time, and never merged with another.

use super::message::Message;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What a conversation is about: a department dashboard or one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContextType {
    Department,
    Document,
}

/// Answer language selected by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Malayalam,
}

/// The (type, id, name) triple identifying what a thread is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub context_type: ContextType,
    /// Present for document contexts, absent for department ones
    pub context_id: Option<String>,
    pub context_name: String,
}

impl ChatContext {
    pub fn department(name: impl Into<String>) -> Self {
        Self {
            context_type: ContextType::Department,
            context_id: None,
            context_name: name.into(),
        }
    }

    pub fn document(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            context_type: ContextType::Document,
            context_id: Some(id.into()),
            context_name: name.into(),
        }
    }
}

/// Identifier of a conversation thread.
///
/// Minted as `"{context_type}-{context_name}-{unix_millis}"`, which doubles
/// as the `chat_id` on the wire. Identity never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Mints an id for the given context at the current time.
    ///
    /// The millisecond clock alone does not guarantee uniqueness; the
    /// registry nudges the timestamp forward when it already holds the
    /// minted key.
    pub fn mint(context: &ChatContext) -> Self {
        Self::mint_at(context, chrono::Utc::now().timestamp_millis())
    }

    /// Mints an id with an explicit timestamp.
    pub fn mint_at(context: &ChatContext, unix_millis: i64) -> Self {
        Self(format!(
            "{}-{}-{}",
            context.context_type, context.context_name, unix_millis
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ThreadId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ThreadId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One conversation thread: an identity, its context, and an insertion-ordered
/// message sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationThread {
    pub id: ThreadId,
    pub context: ChatContext,
    /// Strictly ordered by insertion; timestamp ties keep insertion order
    pub messages: Vec<Message>,
}

impl ConversationThread {
    pub fn new(id: ThreadId, context: ChatContext) -> Self {
        Self {
            id,
            context,
            messages: Vec::new(),
        }
    }

    /// Appends a message, returning its id.
    pub fn push(&mut self, message: Message) -> String {
        let id = message.id.clone();
        self.messages.push(message);
        id
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_id_format() {
        let context = ChatContext::department("Finance");
        let id = ThreadId::mint(&context);
        assert!(id.as_str().starts_with("department-Finance-"));
    }

    #[test]
    fn test_context_type_display() {
        assert_eq!(ContextType::Department.to_string(), "department");
        assert_eq!(ContextType::Document.to_string(), "document");
    }

    #[test]
    fn test_language_default_and_wire_form() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(
            serde_json::to_string(&Language::Malayalam).unwrap(),
            "\"malayalam\""
        );
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let context = ChatContext::department("HR");
        let mut thread = ConversationThread::new(ThreadId::mint(&context), context);

        // Identical timestamps must not reorder anything
        let mut first = Message::user("first");
        let mut second = Message::user("second");
        second.timestamp = first.timestamp.clone();
        first.timestamp = second.timestamp.clone();

        thread.push(first);
        thread.push(second);

        assert_eq!(thread.messages[0].content, "first");
        assert_eq!(thread.messages[1].content, "second");
    }
}
