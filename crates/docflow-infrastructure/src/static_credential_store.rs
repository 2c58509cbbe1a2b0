//! Static credential directory.
//!
//! A simple in-memory `CredentialStore` suitable for demo and development
//! environments. Production deployments would replace this with an identity
//! provider behind the same trait.

use async_trait::async_trait;
use docflow_core::error::Result;
use docflow_core::session::{CredentialStore, Role, UserRecord};

/// `CredentialStore` over a fixed list of records.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    records: Vec<UserRecord>,
}

impl StaticCredentialStore {
    /// Creates a store from an explicit directory, e.g. one loaded from
    /// configuration.
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// The built-in demo directory: one admin plus one account per
    /// department dashboard.
    pub fn builtin() -> Self {
        fn record(
            username: &str,
            password: &str,
            department: &str,
            role: Role,
            full_name: &str,
        ) -> UserRecord {
            UserRecord {
                username: username.to_string(),
                password: password.to_string(),
                department: department.to_string(),
                role,
                full_name: full_name.to_string(),
            }
        }

        Self::from_records(vec![
            record("admin", "admin123", "admin", Role::Admin, "Administrator"),
            record(
                "eng.manager",
                "eng123",
                "engineering",
                Role::Manager,
                "Engineering Manager",
            ),
            record(
                "proc.staff",
                "proc123",
                "procurement",
                Role::Staff,
                "Procurement Staff",
            ),
            record(
                "fin.manager",
                "fin123",
                "finance",
                Role::Manager,
                "Finance Manager",
            ),
            record("hr.staff", "hr123", "hr", Role::Staff, "HR Staff"),
        ])
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .records
            .iter()
            .find(|r| r.username == username && r.password == password)
            .cloned())
    }
}
