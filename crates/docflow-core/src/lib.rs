pub mod access;
pub mod alert;
pub mod config;
pub mod conversation;
pub mod document;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::DocflowError;
