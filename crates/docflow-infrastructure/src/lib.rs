pub mod config_service;
pub mod json_session_store;
pub mod paths;
pub mod static_credential_store;

pub use crate::json_session_store::JsonSessionStore;
pub use crate::static_credential_store::StaticCredentialStore;
