//! Configuration loading.
//!
//! Reads `config.toml` from the docflow config directory, creating it with
//! defaults on first run.

use crate::paths::DocflowPaths;
use docflow_core::config::PortalConfig;
use docflow_core::error::{DocflowError, Result};
use std::path::Path;

/// Loads the portal configuration from the default location, writing a
/// default file when none exists.
pub async fn load_default() -> Result<PortalConfig> {
    let path = DocflowPaths::config_file().map_err(|e| DocflowError::config(e.to_string()))?;
    load_or_init(&path).await
}

/// Loads configuration from `path`.
///
/// A missing file is created with default contents; a malformed file is a
/// `Config` error (it is not silently replaced, unlike the session record,
/// since configuration is user-edited).
pub async fn load_or_init(path: &Path) -> Result<PortalConfig> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => toml::from_str(&content)
            .map_err(|e| DocflowError::config(format!("{}: {}", path.display(), e))),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let config = PortalConfig::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, toml::to_string_pretty(&config)?).await?;
            tracing::info!(path = %path.display(), "wrote default configuration");
            Ok(config)
        }
        Err(err) => Err(err.into()),
    }
}
