//! Session domain model.
//!
//! This module contains the core Session entity that represents an
//! authenticated user in the portal's domain layer.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Role of an authenticated user.
///
/// Admins may enter every department dashboard; managers and staff are
/// confined to their own department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

/// Represents the active user session.
///
/// Exactly one session is active per client at a time, or none. A session is
/// created on successful login, persisted to durable client storage, and
/// destroyed on logout or on a failed restore. The `SessionManager` is the
/// exclusive owner; every other component only reads snapshots.
///
/// Field names serialize in camelCase to match the persisted client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Login name, unique within the credential directory
    pub username: String,
    /// Department the user belongs to (e.g. "engineering")
    pub department: String,
    /// Authorization role
    pub role: Role,
    /// Display name
    pub full_name: String,
}

/// Authentication state owned by the `SessionManager`.
///
/// Transitions: `login` success moves `Unauthenticated` to `Authenticated`;
/// `logout` moves back; `restore` may activate a persisted session at
/// startup only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    /// Returns the session if authenticated.
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Unauthenticated => None,
            AuthState::Authenticated(session) => Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}
