//! Message exchange pipeline.
//!
//! Coordinates the conversation registry with the assistant backend: a user
//! message is appended optimistically before the network round trip, then
//! either upgraded to confirmed alongside the assistant's reply, or marked
//! unconfirmed when the exchange fails. Each outbound request is tagged with
//! its originating thread id, so a slow response is appended to the thread
//! that asked the question even if the user has since switched threads.

use crate::loading::LoadingIndicator;
use docflow_core::conversation::{
    ChatBackend, ChatContext, ChatRequest, ConversationRegistry, HistoryIndex, Language, Message,
    ThreadId, ThreadSummary,
};
use docflow_core::document::{validate_upload, DocumentBackend, UploadReceipt};
use docflow_core::error::{DocflowError, Result};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Use case for the chat surface of a dashboard.
///
/// Owns the conversation registry for the session's lifetime and talks to
/// the assistant/document backends through their collaborator traits.
pub struct ChatService {
    registry: Arc<RwLock<ConversationRegistry>>,
    chat_backend: Arc<dyn ChatBackend>,
    document_backend: Arc<dyn DocumentBackend>,
    loading: LoadingIndicator,
    language: RwLock<Language>,
    /// Threads with an exchange currently in flight; the UI disables input
    /// per thread, this enforces the same rule at the pipeline boundary
    in_flight: Mutex<HashSet<ThreadId>>,
    /// Number of sends awaiting a response across all threads. The shared
    /// loading label only clears when the last one finishes.
    active_sends: AtomicUsize,
}

impl ChatService {
    pub fn new(
        chat_backend: Arc<dyn ChatBackend>,
        document_backend: Arc<dyn DocumentBackend>,
    ) -> Self {
        Self {
            registry: Arc::new(RwLock::new(ConversationRegistry::new())),
            chat_backend,
            document_backend,
            loading: LoadingIndicator::new(),
            language: RwLock::new(Language::default()),
            in_flight: Mutex::new(HashSet::new()),
            active_sends: AtomicUsize::new(0),
        }
    }

    /// Starts a fresh thread for the context and makes it current.
    pub async fn start_thread(&self, context: ChatContext) -> ThreadId {
        self.registry.write().await.start_new_thread(context)
    }

    /// Switches to a known thread; returns false (keeping the prior thread
    /// current) for an unknown id.
    pub async fn switch_thread(&self, thread_id: &ThreadId) -> bool {
        self.registry.write().await.switch_thread(thread_id)
    }

    /// Messages of the currently displayed thread.
    pub async fn current_messages(&self) -> Vec<Message> {
        self.registry
            .read()
            .await
            .current_thread()
            .map(|t| t.messages.clone())
            .unwrap_or_default()
    }

    pub async fn current_thread_id(&self) -> Option<ThreadId> {
        self.registry.read().await.current_thread_id().cloned()
    }

    pub async fn set_language(&self, language: Language) {
        *self.language.write().await = language;
    }

    pub async fn language(&self) -> Language {
        *self.language.read().await
    }

    /// The loading indicator for this chat surface.
    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    /// Sends one exchange on the current thread.
    ///
    /// The user message is appended synchronously before any network I/O. On
    /// success the reply is appended to the originating thread and both
    /// messages end up confirmed; on failure the user message stays visible,
    /// marked unconfirmed, and nothing is appended. No automatic retry.
    ///
    /// # Errors
    ///
    /// `Validation` when no thread is current or the thread already has an
    /// exchange in flight; `Network` when the backend call fails.
    pub async fn send(&self, text: &str) -> Result<Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DocflowError::validation("empty message"));
        }

        // Optimistic append, all within one lock scope so nothing interleaves
        let (thread_id, context, user_message_id) = {
            let mut registry = self.registry.write().await;
            let thread = registry
                .current_thread()
                .ok_or_else(|| DocflowError::validation("no active conversation thread"))?;
            let thread_id = thread.id.clone();
            let context = thread.context.clone();

            {
                let mut in_flight = self.in_flight.lock().await;
                if in_flight.contains(&thread_id) {
                    return Err(DocflowError::validation(
                        "a message is already in flight for this thread",
                    ));
                }
                in_flight.insert(thread_id.clone());
            }

            let user_message_id = registry.append_message(&thread_id, Message::user(text))?;
            (thread_id, context, user_message_id)
        };

        // Every send restarts the rotation from its first label; the label
        // only clears once no send remains in flight on any thread.
        self.active_sends.fetch_add(1, Ordering::SeqCst);
        self.loading.start();

        let request = ChatRequest {
            message: text.to_string(),
            context,
            chat_id: thread_id.as_str().to_string(),
            language: self.language().await,
        };

        let outcome = self.chat_backend.send_message(&request).await;

        if self.active_sends.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.loading.stop();
        }
        self.in_flight.lock().await.remove(&thread_id);

        match outcome {
            Ok(reply) => {
                let mut registry = self.registry.write().await;
                registry.confirm_message(&thread_id, &user_message_id)?;
                let assistant = Message::assistant(reply.response);
                registry.append_message(&thread_id, assistant.clone())?;
                Ok(assistant)
            }
            Err(err) => {
                tracing::warn!(thread_id = %thread_id, error = %err, "chat exchange failed");
                let mut registry = self.registry.write().await;
                registry.mark_unconfirmed(&thread_id, &user_message_id)?;
                Err(err)
            }
        }
    }

    /// Uploads a file through the chat's attachment side-channel.
    ///
    /// Validation runs before any network call; a rejected file produces a
    /// synchronous `Validation` error and nothing else. Once the upload has
    /// been attempted, its outcome is injected into the active thread as a
    /// synthetic assistant message, so the result is visible in-line.
    pub async fn upload_to_chat(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReceipt> {
        validate_upload(filename, bytes.len() as u64)?;

        match self.document_backend.upload(filename, bytes).await {
            Ok(receipt) => {
                self.inject_assistant_note(format!(
                    "✅ File '{}' uploaded and ingested successfully! ({} chunks)",
                    filename, receipt.chunks_created
                ))
                .await;
                Ok(receipt)
            }
            Err(err) => {
                self.inject_assistant_note(format!("❌ File upload failed: {}", err)).await;
                Err(err)
            }
        }
    }

    /// Fetches the remote history index.
    pub async fn refresh_history(&self) -> Result<HistoryIndex> {
        self.chat_backend.fetch_history().await
    }

    /// Lists threads most-recent-first from the remote store.
    pub async fn list_threads(&self) -> Result<Vec<ThreadSummary>> {
        let history = self.refresh_history().await?;
        Ok(self.registry.read().await.list_threads(&history))
    }

    /// Opens a thread from the remote history and makes it current.
    pub async fn open_history_thread(&self, chat_id: &str, context: ChatContext) -> Result<ThreadId> {
        let history = self.refresh_history().await?;
        Ok(self
            .registry
            .write()
            .await
            .adopt_from_history(chat_id, context, &history))
    }

    async fn inject_assistant_note(&self, content: String) {
        let mut registry = self.registry.write().await;
        if let Some(thread_id) = registry.current_thread_id().cloned() {
            // The registry cannot refuse a known current thread
            let _ = registry.append_message(&thread_id, Message::assistant(content));
        }
    }
}
