//! Loading-label rotation for in-flight chat exchanges.
//!
//! Purely cosmetic: while a send is awaiting its response, the label cycles
//! Thinking → Analyzing → Processing → Thinking on a one-second period, and
//! resets to the first label at the start of every new send.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The fixed label rotation.
pub const LOADING_LABELS: [&str; 3] = ["Thinking", "Analyzing", "Processing"];

const ROTATION_PERIOD: Duration = Duration::from_secs(1);

/// Publishes the current loading label over a watch channel.
///
/// `None` means idle. The rotation task is a scoped resource: it is aborted
/// on `stop`, on a restart, and on drop.
pub struct LoadingIndicator {
    tx: Arc<watch::Sender<Option<&'static str>>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx: Arc::new(tx),
            ticker: Mutex::new(None),
        }
    }

    /// Subscribes to label updates.
    pub fn subscribe(&self) -> watch::Receiver<Option<&'static str>> {
        self.tx.subscribe()
    }

    /// Current label, `None` when idle.
    pub fn current(&self) -> Option<&'static str> {
        *self.tx.borrow()
    }

    /// Starts (or restarts) the rotation from the first label.
    ///
    /// Updates go through `send_replace`, which stores the value whether or
    /// not anyone is subscribed; the label must be observable via
    /// `current()` even before the first receiver appears. The ticker only
    /// ends by abort.
    pub fn start(&self) {
        self.abort_ticker();
        self.tx.send_replace(Some(LOADING_LABELS[0]));

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + ROTATION_PERIOD;
            let mut interval = tokio::time::interval_at(start, ROTATION_PERIOD);
            let mut index = 0usize;
            loop {
                interval.tick().await;
                index = (index + 1) % LOADING_LABELS.len();
                tx.send_replace(Some(LOADING_LABELS[index]));
            }
        });

        *self.ticker.lock().unwrap() = Some(handle);
    }

    /// Stops the rotation and clears the label.
    pub fn stop(&self) {
        self.abort_ticker();
        self.tx.send_replace(None);
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().is_some()
    }

    fn abort_ticker(&self) {
        if let Some(handle) = self.ticker.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.abort_ticker();
    }
}
