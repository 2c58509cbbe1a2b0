//! Dashboard entry use case.
//!
//! The single place where navigation asks "may this user see this
//! department's dashboard". All routes funnel through [`enter_dashboard`];
//! there is no per-page re-check anywhere else.
//!
//! [`enter_dashboard`]: DashboardUseCase::enter_dashboard

use docflow_core::access::{authorize, AccessDecision};
use docflow_core::session::{Session, SessionManager};
use docflow_core::error::Result;
use std::sync::Arc;

/// Facade over authentication and department access for the shell UI.
pub struct DashboardUseCase {
    sessions: Arc<SessionManager>,
}

impl DashboardUseCase {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }

    /// Restores a persisted session, if any, on startup.
    pub async fn restore(&self) -> Result<Option<Session>> {
        self.sessions.restore().await
    }

    /// Attempts a login; `Ok(false)` means bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool> {
        self.sessions.login(username, password).await
    }

    pub async fn logout(&self) -> Result<()> {
        self.sessions.logout().await
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.sessions.current_session().await
    }

    /// Decides whether the current user may enter a department dashboard.
    ///
    /// Admins may enter any dashboard; everyone else only their own
    /// department's. An unauthenticated user is redirected to the login
    /// route instead of denied.
    pub async fn enter_dashboard(&self, department: &str) -> AccessDecision {
        let state = self.sessions.auth_state().await;
        let decision = authorize(&state, department);
        if decision == AccessDecision::Deny {
            tracing::info!(
                department,
                user = state.session().map(|s| s.username.as_str()).unwrap_or(""),
                "dashboard access denied"
            );
        }
        decision
    }
}
