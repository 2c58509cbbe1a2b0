//! File-backed session store.
//!
//! Persists the active session as a single JSON record under the fixed
//! session path. A malformed record on disk is discarded and reported as
//! "no session", so a corrupt file can never wedge startup.

use crate::paths::DocflowPaths;
use async_trait::async_trait;
use docflow_core::error::{DocflowError, Result};
use docflow_core::session::{Session, SessionStore};
use std::path::PathBuf;

/// `SessionStore` implementation over a single JSON file.
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    /// Creates a store over the default session path
    /// (`~/.config/docflow/session.json`).
    pub fn new_default() -> Result<Self> {
        let path = DocflowPaths::session_file()
            .map_err(|e| DocflowError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a store over an explicit path. Used by tests and embedders.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for JsonSessionStore {
    async fn load(&self) -> Result<Option<Session>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Session>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // Corrupt record degrades to "logged out"
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "discarding malformed session record"
                );
                let _ = tokio::fs::remove_file(&self.path).await;
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(username = %session.username, "persisted session record");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_core::session::Role;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonSessionStore {
        JsonSessionStore::new(dir.path().join("session.json"))
    }

    fn sample_session() -> Session {
        Session {
            username: "eng.manager".to_string(),
            department: "engineering".to_string(),
            role: Role::Manager,
            full_name: "Engineering Manager".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let session = sample_session();

        store.save(&session).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn test_malformed_record_degrades_to_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "{not json at all")
            .await
            .unwrap();

        let loaded = store.load().await.unwrap();

        assert!(loaded.is_none());
        // The corrupt file was discarded
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&sample_session()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }
}
