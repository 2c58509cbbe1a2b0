//! Periodic alert polling.
//!
//! Fetches the department's unacknowledged alerts on a fixed interval and
//! publishes each successful batch on a watch channel. The poll task is tied
//! to the poller's lifetime: stopping the poller, or dropping it, aborts the
//! task so no orphaned fetch loop outlives the dashboard that started it.

use docflow_core::alert::{Alert, AlertBackend};
use docflow_core::config::AlertSettings;
use docflow_core::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

/// Polls the alert backend and publishes the latest batch.
pub struct AlertPoller {
    backend: Arc<dyn AlertBackend>,
    interval: Duration,
    tx: Arc<watch::Sender<Vec<Alert>>>,
    rx: watch::Receiver<Vec<Alert>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AlertPoller {
    pub fn new(backend: Arc<dyn AlertBackend>, settings: &AlertSettings) -> Self {
        let (tx, rx) = watch::channel(Vec::new());
        Self {
            backend,
            interval: Duration::from_secs(settings.poll_interval_secs),
            tx: Arc::new(tx),
            rx,
            task: Mutex::new(None),
        }
    }

    /// A receiver over the latest alert batch.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Alert>> {
        self.rx.clone()
    }

    /// The most recently published batch.
    pub fn current(&self) -> Vec<Alert> {
        self.rx.borrow().clone()
    }

    /// Fetches once, immediately, and publishes the result.
    pub async fn poll_once(&self) -> Result<Vec<Alert>> {
        let alerts = self.backend.fetch_alerts().await?;
        self.tx.send_replace(alerts.clone());
        Ok(alerts)
    }

    /// Starts the background polling loop.
    ///
    /// The loop fetches right away and then on every interval tick. A failed
    /// fetch is logged and skipped; the previously published batch stays
    /// visible until the next success. Calling `start` again replaces the
    /// running loop.
    pub async fn start(&self) {
        let backend = self.backend.clone();
        let tx = self.tx.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match backend.fetch_alerts().await {
                    Ok(alerts) => {
                        tx.send_replace(alerts);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "alert poll failed, keeping last batch");
                    }
                }
            }
        });

        if let Some(previous) = self.task.lock().await.replace(handle) {
            previous.abort();
        }
    }

    /// Stops the background polling loop. Idempotent.
    pub async fn stop(&self) {
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
        }
    }

    /// Acknowledges one alert and removes it from the published batch
    /// without waiting for the next poll.
    pub async fn acknowledge(&self, alert_id: &str) -> Result<()> {
        self.backend.acknowledge(alert_id).await?;
        self.tx.send_modify(|alerts| {
            alerts.retain(|a| a.id.as_deref() != Some(alert_id));
        });
        Ok(())
    }

    /// Acknowledges every outstanding alert and clears the published batch.
    pub async fn acknowledge_all(&self) -> Result<()> {
        self.backend.acknowledge_all().await?;
        self.tx.send_replace(Vec::new());
        Ok(())
    }
}

impl Drop for AlertPoller {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}
