//! Assistant backend collaborator contract.
//!
//! The retrieval/answer-generation backend is external; this trait is the
//! portal's view of it.

use super::history::HistoryIndex;
use super::model::{ChatContext, Language};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One outbound chat exchange: the user's text plus the context metadata and
/// the selected answer language, tagged with the originating thread's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContext,
    /// Composite thread id, doubling as the remote chat id
    pub chat_id: String,
    pub language: Language,
}

/// Reference to a source document chunk backing an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub filename: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub score: f64,
}

/// The assistant's answer to one exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub chat_id: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

/// The assistant backend: answers grounded in uploaded documents, plus the
/// durable conversation history.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends one exchange and returns the assistant's reply.
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Fetches the full history index from the remote store.
    async fn fetch_history(&self) -> Result<HistoryIndex>;
}
