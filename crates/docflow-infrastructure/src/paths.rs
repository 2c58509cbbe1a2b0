//! Unified path management for docflow files.
//!
//! The persisted session record and the configuration file live under one
//! platform config directory so every storage mechanism agrees on locations.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for docflow.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/docflow/           # Config directory
/// ├── config.toml              # Application configuration
/// └── session.json             # Persisted session record (fixed storage key)
/// ```
pub struct DocflowPaths;

impl DocflowPaths {
    /// Returns the docflow configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/docflow/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("docflow"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session record.
    ///
    /// This is the single fixed storage key for the active session; only the
    /// session store writes it.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = DocflowPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("docflow"));
    }

    #[test]
    fn test_config_file() {
        let config_file = DocflowPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = DocflowPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_session_file() {
        let session_file = DocflowPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.json"));
        let config_dir = DocflowPaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }
}
