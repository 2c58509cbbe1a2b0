//! Remote conversation history.
//!
//! The remote store is the durable owner of history across reloads. It hands
//! back question/answer pairs grouped by chat id; this module turns those
//! into message sequences and listing summaries. History is read and merged
//! on demand, never authoritative over in-memory unsent messages.

use super::message::{Message, Sender};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One historical question/answer exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Summary of a thread for history listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSummary {
    pub chat_id: String,
    /// First question of the thread, used as its display title
    pub title: String,
    /// Number of question/answer exchanges
    pub exchanges: usize,
    /// Timestamp of the first exchange (RFC 3339)
    pub started_at: String,
}

/// Mapping from chat id to its ordered exchanges, as returned by the remote
/// history endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryIndex(pub BTreeMap<String, Vec<HistoryEntry>>);

impl HistoryIndex {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, chat_id: &str) -> bool {
        self.0.contains_key(chat_id)
    }

    /// Expands a thread's exchanges into an alternating user/assistant
    /// message sequence. Unknown ids yield an empty sequence.
    pub fn messages_for(&self, chat_id: &str) -> Vec<Message> {
        let Some(entries) = self.0.get(chat_id) else {
            return Vec::new();
        };

        let mut messages = Vec::with_capacity(entries.len() * 2);
        for entry in entries {
            messages.push(Message::from_history(
                &entry.question,
                Sender::User,
                &entry.timestamp,
            ));
            messages.push(Message::from_history(
                &entry.answer,
                Sender::Assistant,
                &entry.timestamp,
            ));
        }
        messages
    }

    /// Lists threads most-recent-first by the timestamp of their first
    /// exchange. Recomputed on each call; the remote store is the source of
    /// truth for history display.
    pub fn thread_summaries(&self) -> Vec<ThreadSummary> {
        let mut summaries: Vec<ThreadSummary> = self
            .0
            .iter()
            .map(|(chat_id, entries)| {
                let first = entries.first();
                ThreadSummary {
                    chat_id: chat_id.clone(),
                    title: first
                        .map(|e| e.question.clone())
                        .unwrap_or_else(|| "Untitled Chat".to_string()),
                    exchanges: entries.len(),
                    started_at: first.map(|e| e.timestamp.clone()).unwrap_or_default(),
                }
            })
            .collect();

        // RFC 3339 strings sort chronologically
        summaries.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(question: &str, answer: &str, timestamp: &str) -> HistoryEntry {
        HistoryEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    fn sample_index() -> HistoryIndex {
        let mut map = BTreeMap::new();
        map.insert(
            "department-Finance-100".to_string(),
            vec![
                entry("What is the budget?", "The budget is...", "2026-01-02T10:00:00Z"),
                entry("And last year?", "Last year...", "2026-01-02T10:05:00Z"),
            ],
        );
        map.insert(
            "department-HR-200".to_string(),
            vec![entry("Leave policy?", "The policy...", "2026-01-03T09:00:00Z")],
        );
        HistoryIndex(map)
    }

    #[test]
    fn test_messages_alternate_user_assistant() {
        let index = sample_index();
        let messages = index.messages_for("department-Finance-100");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].content, "What is the budget?");
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert_eq!(messages[3].content, "Last year...");
    }

    #[test]
    fn test_messages_for_unknown_id_is_empty() {
        let index = sample_index();
        assert!(index.messages_for("no-such-thread").is_empty());
    }

    #[test]
    fn test_summaries_most_recent_first() {
        let index = sample_index();
        let summaries = index.thread_summaries();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].chat_id, "department-HR-200");
        assert_eq!(summaries[0].title, "Leave policy?");
        assert_eq!(summaries[1].chat_id, "department-Finance-100");
        assert_eq!(summaries[1].exchanges, 2);
    }

    #[test]
    fn test_deserializes_remote_shape() {
        let json = r#"{
            "department-Finance-100": [
                {"question": "q", "answer": "a", "timestamp": "2026-01-01T00:00:00Z"}
            ]
        }"#;

        let index: HistoryIndex = serde_json::from_str(json).unwrap();
        assert!(index.contains("department-Finance-100"));
    }
}
