use super::credential::CredentialStore;
use super::model::{AuthState, Session};
use super::store::SessionStore;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the authentication state machine.
///
/// `SessionManager` is responsible for:
/// - Restoring a persisted session at startup
/// - Logging users in against the credential store
/// - Logging out and erasing the persisted record
/// - Handing out read-only session snapshots
///
/// It is the single writer of both the in-memory `AuthState` and the
/// persisted record; everything else reads snapshots, so there is no
/// ad-hoc global auth state.
pub struct SessionManager {
    credential_store: Arc<dyn CredentialStore>,
    session_store: Arc<dyn SessionStore>,
    state: Arc<RwLock<AuthState>>,
}

impl SessionManager {
    /// Creates a new `SessionManager` with its collaborators.
    ///
    /// # Arguments
    ///
    /// * `credential_store` - The collaborator validating username/password pairs
    /// * `session_store` - The durable store for the persisted session record
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            credential_store,
            session_store,
            state: Arc::new(RwLock::new(AuthState::Unauthenticated)),
        }
    }

    /// Attempts to restore a persisted session at startup.
    ///
    /// If a well-formed record exists it becomes the active session. A
    /// malformed record is discarded by the store and the state stays
    /// `Unauthenticated`; restore never fails outward because of bad data.
    /// Once authenticated, further calls are no-ops, so the
    /// Unauthenticated-to-Authenticated transition only happens from the
    /// startup state.
    ///
    /// # Returns
    ///
    /// The restored session, if one was activated.
    pub async fn restore(&self) -> Result<Option<Session>> {
        {
            let state = self.state.read().await;
            if state.is_authenticated() {
                return Ok(state.session().cloned());
            }
        }

        match self.session_store.load().await? {
            Some(session) => {
                let mut state = self.state.write().await;
                *state = AuthState::Authenticated(session.clone());
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    /// Logs a user in.
    ///
    /// Delegates the credential check to the credential store. On a match the
    /// session is activated and persisted (exactly one store write); on a
    /// mismatch the method returns `false` without mutating any state.
    ///
    /// # Errors
    ///
    /// Returns an error only when a collaborator fails, never for wrong
    /// credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool> {
        let Some(record) = self.credential_store.verify(username, password).await? else {
            return Ok(false);
        };

        let session = Session {
            username: record.username,
            department: record.department,
            role: record.role,
            full_name: record.full_name,
        };

        self.session_store.save(&session).await?;

        let mut state = self.state.write().await;
        *state = AuthState::Authenticated(session);

        Ok(true)
    }

    /// Logs the user out.
    ///
    /// Clears the active session and erases the persisted copy. Idempotent:
    /// calling it with no active session is a no-op.
    pub async fn logout(&self) -> Result<()> {
        {
            let state = self.state.read().await;
            if !state.is_authenticated() {
                return Ok(());
            }
        }

        self.session_store.clear().await?;

        let mut state = self.state.write().await;
        *state = AuthState::Unauthenticated;

        Ok(())
    }

    /// Returns a snapshot of the active session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.state.read().await.session().cloned()
    }

    /// Returns a snapshot of the full authentication state.
    pub async fn auth_state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocflowError;
    use crate::session::credential::UserRecord;
    use crate::session::model::Role;
    use std::sync::Mutex;

    // Mock CredentialStore with a couple of demo records
    struct MockCredentialStore {
        records: Vec<UserRecord>,
    }

    impl MockCredentialStore {
        fn new() -> Self {
            Self {
                records: vec![
                    UserRecord {
                        username: "eng.manager".to_string(),
                        password: "eng123".to_string(),
                        department: "engineering".to_string(),
                        role: Role::Manager,
                        full_name: "Engineering Manager".to_string(),
                    },
                    UserRecord {
                        username: "admin".to_string(),
                        password: "admin123".to_string(),
                        department: "admin".to_string(),
                        role: Role::Admin,
                        full_name: "Administrator".to_string(),
                    },
                ],
            }
        }
    }

    #[async_trait::async_trait]
    impl CredentialStore for MockCredentialStore {
        async fn verify(&self, username: &str, password: &str) -> Result<Option<UserRecord>> {
            Ok(self
                .records
                .iter()
                .find(|r| r.username == username && r.password == password)
                .cloned())
        }
    }

    // Mock SessionStore recording writes
    struct MockSessionStore {
        record: Mutex<Option<Session>>,
        save_count: Mutex<usize>,
    }

    impl MockSessionStore {
        fn new() -> Self {
            Self {
                record: Mutex::new(None),
                save_count: Mutex::new(0),
            }
        }

        fn with_record(session: Session) -> Self {
            Self {
                record: Mutex::new(Some(session)),
                save_count: Mutex::new(0),
            }
        }

        fn saves(&self) -> usize {
            *self.save_count.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl SessionStore for MockSessionStore {
        async fn load(&self) -> Result<Option<Session>> {
            Ok(self.record.lock().unwrap().clone())
        }

        async fn save(&self, session: &Session) -> Result<()> {
            *self.record.lock().unwrap() = Some(session.clone());
            *self.save_count.lock().unwrap() += 1;
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.record.lock().unwrap() = None;
            Ok(())
        }
    }

    // SessionStore whose save always fails
    struct FailingSessionStore;

    #[async_trait::async_trait]
    impl SessionStore for FailingSessionStore {
        async fn load(&self) -> Result<Option<Session>> {
            Ok(None)
        }

        async fn save(&self, _session: &Session) -> Result<()> {
            Err(DocflowError::io("disk full"))
        }

        async fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    fn manager_with(store: Arc<MockSessionStore>) -> SessionManager {
        SessionManager::new(Arc::new(MockCredentialStore::new()), store)
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let store = Arc::new(MockSessionStore::new());
        let manager = manager_with(store.clone());

        let ok = manager.login("eng.manager", "eng123").await.unwrap();

        assert!(ok);
        let session = manager.current_session().await.unwrap();
        assert_eq!(session.department, "engineering");
        assert_eq!(session.role, Role::Manager);
        // Exactly one persisted write per successful login
        assert_eq!(store.saves(), 1);
    }

    #[tokio::test]
    async fn test_login_with_invalid_credentials() {
        let store = Arc::new(MockSessionStore::new());
        let manager = manager_with(store.clone());

        let ok = manager.login("eng.manager", "wrong").await.unwrap();

        assert!(!ok);
        assert!(!manager.is_authenticated().await);
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_login_persist_failure_leaves_unauthenticated() {
        let manager = SessionManager::new(
            Arc::new(MockCredentialStore::new()),
            Arc::new(FailingSessionStore),
        );

        let result = manager.login("admin", "admin123").await;

        assert!(result.is_err());
        assert!(!manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_activates_persisted_session() {
        let session = Session {
            username: "admin".to_string(),
            department: "admin".to_string(),
            role: Role::Admin,
            full_name: "Administrator".to_string(),
        };
        let store = Arc::new(MockSessionStore::with_record(session.clone()));
        let manager = manager_with(store);

        let restored = manager.restore().await.unwrap();

        assert_eq!(restored, Some(session));
        assert!(manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_with_no_record() {
        let manager = manager_with(Arc::new(MockSessionStore::new()));

        let restored = manager.restore().await.unwrap();

        assert!(restored.is_none());
        assert!(!manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_after_login_keeps_active_session() {
        let store = Arc::new(MockSessionStore::new());
        let manager = manager_with(store);

        manager.login("eng.manager", "eng123").await.unwrap();
        let restored = manager.restore().await.unwrap().unwrap();

        assert_eq!(restored.username, "eng.manager");
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_record() {
        let store = Arc::new(MockSessionStore::new());
        let manager = manager_with(store.clone());

        manager.login("admin", "admin123").await.unwrap();
        manager.logout().await.unwrap();

        assert!(!manager.is_authenticated().await);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_without_session_is_noop() {
        let manager = manager_with(Arc::new(MockSessionStore::new()));

        manager.logout().await.unwrap();
        manager.logout().await.unwrap();

        assert!(!manager.is_authenticated().await);
    }
}
