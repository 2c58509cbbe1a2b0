//! Alert endpoints: fetch and acknowledge.

use crate::client::BackendClient;
use async_trait::async_trait;
use docflow_core::alert::{Alert, AlertBackend};
use docflow_core::error::Result;

#[async_trait]
impl AlertBackend for BackendClient {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>> {
        let response = self
            .client
            .get(self.endpoint("/api/alerts"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        let response = Self::check_status(response, "alerts").await?;

        Ok(response.json::<Vec<Alert>>().await?)
    }

    async fn acknowledge(&self, alert_id: &str) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint(&format!("/api/alerts/ack/{}", alert_id)))
            .timeout(self.request_timeout)
            .send()
            .await?;
        Self::check_status(response, "alert ack").await?;
        Ok(())
    }

    async fn acknowledge_all(&self) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("/api/alerts/ack-all"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        Self::check_status(response, "alert ack-all").await?;
        Ok(())
    }
}
