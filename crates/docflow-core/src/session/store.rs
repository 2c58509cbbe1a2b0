//! Session persistence trait.
//!
//! Defines the interface for the durable client-side session record.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the single persisted session record.
///
/// This trait decouples the session state machine from the storage mechanism
/// (a JSON file under a fixed key in this crate's infrastructure layer). Only
/// the `SessionManager` may call `save` and `clear`, which keeps the record
/// free of lost-update races.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session, if any.
    ///
    /// A malformed record must be discarded and reported as `Ok(None)`, so a
    /// corrupt record degrades to "logged out" instead of an error.
    async fn load(&self) -> Result<Option<Session>>;

    /// Persists the session, replacing any previous record.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Erases the persisted record. Idempotent.
    async fn clear(&self) -> Result<()>;
}
