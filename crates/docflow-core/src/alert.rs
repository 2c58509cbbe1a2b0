//! Department alerts.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Priority of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AlertPriority {
    High,
    #[default]
    General,
}

/// One department alert delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub id: Option<String>,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub priority: AlertPriority,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
}

/// Alert delivery and acknowledgement.
#[async_trait]
pub trait AlertBackend: Send + Sync {
    /// Fetches the current unacknowledged alerts.
    async fn fetch_alerts(&self) -> Result<Vec<Alert>>;

    /// Acknowledges a single alert.
    async fn acknowledge(&self, alert_id: &str) -> Result<()>;

    /// Acknowledges every outstanding alert.
    async fn acknowledge_all(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_sparse_alert() {
        let json = r#"{"subject": "Downtime", "body": "Maintenance window tonight"}"#;
        let alert: Alert = serde_json::from_str(json).unwrap();

        assert_eq!(alert.subject, "Downtime");
        assert_eq!(alert.priority, AlertPriority::General);
        assert!(alert.id.is_none());
    }
}
