//! Chat endpoints: send message and fetch history.

use crate::client::BackendClient;
use async_trait::async_trait;
use docflow_core::conversation::{
    ChatBackend, ChatReply, ChatRequest, HistoryIndex, SourceRef,
};
use docflow_core::error::Result;
use serde::{Deserialize, Serialize};

/// Wire form of `POST /api/chat`. Context fields go out camelCase, the chat
/// id and language snake_case, matching the backend contract.
#[derive(Debug, Serialize)]
struct ChatApiRequest<'a> {
    message: &'a str,
    #[serde(rename = "contextType")]
    context_type: String,
    #[serde(rename = "contextId")]
    context_id: Option<&'a str>,
    #[serde(rename = "contextName")]
    context_name: &'a str,
    chat_id: &'a str,
    language: String,
}

#[derive(Debug, Deserialize)]
struct ChatApiResponse {
    response: String,
    chat_id: Option<String>,
    #[serde(default)]
    sources: Vec<ApiSource>,
}

#[derive(Debug, Deserialize)]
struct ApiSource {
    title: String,
    filename: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    score: f64,
}

#[async_trait]
impl ChatBackend for BackendClient {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply> {
        let body = ChatApiRequest {
            message: &request.message,
            context_type: request.context.context_type.to_string(),
            context_id: request.context.context_id.as_deref(),
            context_name: &request.context.context_name,
            chat_id: &request.chat_id,
            language: request.language.to_string(),
        };

        tracing::debug!(chat_id = %request.chat_id, "sending chat message");

        let response = self
            .client
            .post(self.endpoint("/api/chat"))
            .json(&body)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let response = Self::check_status(response, "chat").await?;

        let payload: ChatApiResponse = response.json().await?;
        Ok(ChatReply {
            response: payload.response,
            chat_id: payload.chat_id.unwrap_or_else(|| request.chat_id.clone()),
            sources: payload
                .sources
                .into_iter()
                .map(|s| SourceRef {
                    title: s.title,
                    filename: s.filename,
                    snippet: s.snippet,
                    score: s.score,
                })
                .collect(),
        })
    }

    async fn fetch_history(&self) -> Result<HistoryIndex> {
        let response = self
            .client
            .get(self.endpoint("/api/chat/history"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        let response = Self::check_status(response, "chat history").await?;

        Ok(response.json::<HistoryIndex>().await?)
    }
}
