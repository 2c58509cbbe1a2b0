//! Wires the portal together.
//!
//! The only place that knows about concrete infrastructure: the HTTP backend
//! client, the on-disk session store, and the built-in credential table.
//! Everything above holds trait objects.

use crate::{AlertPoller, ChatService, DashboardUseCase, DocumentService};
use docflow_core::config::PortalConfig;
use docflow_core::error::Result;
use docflow_core::session::SessionManager;
use docflow_infrastructure::{config_service, JsonSessionStore, StaticCredentialStore};
use docflow_interaction::BackendClient;
use std::sync::Arc;

/// The assembled use-case layer for one portal session.
pub struct Portal {
    pub dashboard: DashboardUseCase,
    pub chat: ChatService,
    pub documents: DocumentService,
    pub alerts: AlertPoller,
}

/// Builds the portal from the default config file location.
pub async fn build_portal() -> Result<Portal> {
    let config = config_service::load_default().await?;
    build_portal_with_config(&config)
}

/// Builds the portal from an already-loaded configuration.
pub fn build_portal_with_config(config: &PortalConfig) -> Result<Portal> {
    let client = Arc::new(BackendClient::from_config(config));

    let sessions = Arc::new(SessionManager::new(
        Arc::new(StaticCredentialStore::builtin()),
        Arc::new(JsonSessionStore::new_default()?),
    ));

    Ok(Portal {
        dashboard: DashboardUseCase::new(sessions),
        chat: ChatService::new(client.clone(), client.clone()),
        documents: DocumentService::new(client.clone()),
        alerts: AlertPoller::new(client, &config.alerts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_portal_starts_unauthenticated() {
        let portal = build_portal_with_config(&PortalConfig::default()).unwrap();

        assert!(portal.dashboard.current_session().await.is_none());
        assert!(portal.chat.current_thread_id().await.is_none());
        assert!(portal.documents.documents().await.is_empty());
        assert!(portal.alerts.current().is_empty());
    }
}
