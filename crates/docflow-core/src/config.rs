//! Portal configuration model.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BackendSettings {
    /// Base URL of the assistant backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Uploads get a longer budget than ordinary requests
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_upload_timeout_secs() -> u64 {
    300
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            upload_timeout_secs: default_upload_timeout_secs(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AlertSettings {
    /// Seconds between alert polls
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    60
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// Root configuration, stored as `config.toml` under the portal's config
/// directory.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub alerts: AlertSettings,
}
