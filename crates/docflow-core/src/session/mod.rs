//! Session management: authentication state machine and its collaborators.

pub mod credential;
pub mod manager;
pub mod model;
pub mod store;

pub use credential::{CredentialStore, UserRecord};
pub use manager::SessionManager;
pub use model::{AuthState, Role, Session};
pub use store::SessionStore;
