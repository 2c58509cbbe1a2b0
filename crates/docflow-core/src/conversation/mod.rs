//! Conversation domain: threads, messages, remote history, and the
//! assistant backend contract.

pub mod backend;
pub mod history;
pub mod message;
pub mod model;
pub mod registry;

pub use backend::{ChatBackend, ChatReply, ChatRequest, SourceRef};
pub use history::{HistoryEntry, HistoryIndex, ThreadSummary};
pub use message::{Delivery, Message, Sender};
pub use model::{ChatContext, ContextType, ConversationThread, Language, ThreadId};
pub use registry::ConversationRegistry;
