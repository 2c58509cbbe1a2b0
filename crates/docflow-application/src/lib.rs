//! Use-case layer for the document workflow portal.
//!
//! Each type here orchestrates domain logic from `docflow-core` against the
//! backend clients in `docflow-interaction`, and owns the lifecycle of any
//! background task it spawns.

pub mod alert_poller;
pub mod bootstrap;
pub mod chat_service;
pub mod dashboard_usecase;
pub mod document_service;
pub mod loading;

pub use alert_poller::AlertPoller;
pub use bootstrap::{build_portal, build_portal_with_config, Portal};
pub use chat_service::ChatService;
pub use dashboard_usecase::DashboardUseCase;
pub use document_service::{Confirmation, DocumentService};
pub use loading::LoadingIndicator;
