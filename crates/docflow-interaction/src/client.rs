//! HTTP client for the assistant backend.
//!
//! One `BackendClient` implements all three collaborator traits (chat,
//! documents, alerts) against the backend's JSON/HTTP API.

use docflow_core::config::PortalConfig;
use docflow_core::error::{DocflowError, Result};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Client for the assistant backend's HTTP API.
#[derive(Clone)]
pub struct BackendClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) request_timeout: Duration,
    pub(crate) upload_timeout: Duration,
}

/// Error body most endpoints return on failure.
#[derive(Debug, Deserialize)]
struct ApiError {
    error: Option<String>,
}

impl BackendClient {
    /// Creates a client against the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(120),
            upload_timeout: Duration::from_secs(300),
        }
    }

    /// Creates a client against the default local backend.
    pub fn new_default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Creates a client from portal configuration.
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.backend.base_url.clone(),
            request_timeout: Duration::from_secs(config.backend.request_timeout_secs),
            upload_timeout: Duration::from_secs(config.backend.upload_timeout_secs),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Checks the response status, surfacing the server's `error` field (or
    /// raw body) on failure.
    pub(crate) async fn check_status(response: Response, what: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ApiError>(&body)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or(body);

        tracing::warn!(%status, what, %message, "backend request failed");
        Err(DocflowError::network(format!(
            "{} failed ({}): {}",
            what, status, message
        )))
    }
}
