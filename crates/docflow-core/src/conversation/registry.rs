//! Conversation registry.
//!
//! Owns the set of chat threads for the session's lifetime and tracks which
//! one is currently displayed. The registry only mutates in-memory state;
//! talking to the remote store is the message exchange pipeline's job, which
//! keeps this module free of network failure handling.

use super::history::{HistoryIndex, ThreadSummary};
use super::message::{Delivery, Message};
use super::model::{ChatContext, ConversationThread, ThreadId};
use crate::error::{DocflowError, Result};
use std::collections::HashMap;

/// Registry of conversation threads keyed by their composite id.
///
/// Invariant: once any thread exists, the current thread is always one of
/// the registry's known threads.
#[derive(Debug, Default)]
pub struct ConversationRegistry {
    threads: HashMap<ThreadId, ConversationThread>,
    current: Option<ThreadId>,
}

impl ConversationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh thread for the context and makes it current.
    ///
    /// Never dedups: an identical context already holding a thread still gets
    /// a new one. Ids embed a millisecond timestamp, so two calls in the same
    /// millisecond would mint the same key; the timestamp is nudged forward
    /// until the key is unused, never overwriting an existing thread. The new
    /// thread starts with zero messages, which clears the displayed
    /// conversation.
    pub fn start_new_thread(&mut self, context: ChatContext) -> ThreadId {
        let mut millis = chrono::Utc::now().timestamp_millis();
        let mut id = ThreadId::mint_at(&context, millis);
        while self.threads.contains_key(&id) {
            millis += 1;
            id = ThreadId::mint_at(&context, millis);
        }
        self.threads
            .insert(id.clone(), ConversationThread::new(id.clone(), context));
        self.current = Some(id.clone());
        id
    }

    /// Makes a known thread current.
    ///
    /// Fails silently on an unknown id: the prior thread stays current and
    /// `false` is returned.
    pub fn switch_thread(&mut self, thread_id: &ThreadId) -> bool {
        if self.threads.contains_key(thread_id) {
            self.current = Some(thread_id.clone());
            true
        } else {
            false
        }
    }

    /// Materializes a remote history thread into the registry and makes it
    /// current.
    ///
    /// The thread's messages come from the merged remote view. If the thread
    /// already exists in memory its unsent messages win; history is never
    /// authoritative over them.
    pub fn adopt_from_history(
        &mut self,
        chat_id: &str,
        context: ChatContext,
        history: &HistoryIndex,
    ) -> ThreadId {
        let id = ThreadId::from(chat_id);

        if !self.threads.contains_key(&id) {
            let mut thread = ConversationThread::new(id.clone(), context);
            thread.messages = history.messages_for(chat_id);
            self.threads.insert(id.clone(), thread);
        }

        self.current = Some(id.clone());
        id
    }

    /// Appends a message to a thread's in-memory sequence.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown thread id.
    pub fn append_message(&mut self, thread_id: &ThreadId, message: Message) -> Result<String> {
        let thread = self
            .threads
            .get_mut(thread_id)
            .ok_or_else(|| DocflowError::not_found("thread", thread_id.as_str()))?;
        Ok(thread.push(message))
    }

    /// Upgrades a pending message to confirmed.
    pub fn confirm_message(&mut self, thread_id: &ThreadId, message_id: &str) -> Result<()> {
        self.set_delivery(thread_id, message_id, Delivery::Confirmed)
    }

    /// Marks a pending message as unconfirmed after a failed exchange.
    pub fn mark_unconfirmed(&mut self, thread_id: &ThreadId, message_id: &str) -> Result<()> {
        self.set_delivery(thread_id, message_id, Delivery::Unconfirmed)
    }

    fn set_delivery(
        &mut self,
        thread_id: &ThreadId,
        message_id: &str,
        delivery: Delivery,
    ) -> Result<()> {
        let thread = self
            .threads
            .get_mut(thread_id)
            .ok_or_else(|| DocflowError::not_found("thread", thread_id.as_str()))?;
        let message = thread
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or_else(|| DocflowError::not_found("message", message_id))?;
        message.delivery = delivery;
        Ok(())
    }

    /// Lists threads most-recent-first, derived from the remote history
    /// index. Recomputed on each call.
    pub fn list_threads(&self, history: &HistoryIndex) -> Vec<ThreadSummary> {
        history.thread_summaries()
    }

    pub fn current_thread(&self) -> Option<&ConversationThread> {
        self.current.as_ref().and_then(|id| self.threads.get(id))
    }

    pub fn current_thread_id(&self) -> Option<&ThreadId> {
        self.current.as_ref()
    }

    pub fn thread(&self, thread_id: &ThreadId) -> Option<&ConversationThread> {
        self.threads.get(thread_id)
    }

    pub fn contains(&self, thread_id: &ThreadId) -> bool {
        self.threads.contains_key(thread_id)
    }

    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }
}
