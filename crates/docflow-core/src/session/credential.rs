//! Credential store collaborator contract.

use super::model::Role;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single entry in the credential directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub department: String,
    pub role: Role,
    pub full_name: String,
}

/// An abstract credential store that validates username/password pairs.
///
/// The portal delegates the actual credential check to this collaborator so
/// the session state machine stays independent of where the directory lives
/// (static demo records, config file, remote identity provider).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Verifies a username/password pair.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))`: credentials match
    /// - `Ok(None)`: no match; never an error, wrong credentials are an
    ///   expected outcome
    /// - `Err(_)`: the store itself could not be consulted
    async fn verify(&self, username: &str, password: &str) -> Result<Option<UserRecord>>;
}
