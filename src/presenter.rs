//! Presentation surface for download progress.

use crate::progress_bridge::ProgressBridge;
use log::info;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Contract for the surface that shows download progress and lets a user
/// reach the cancel action. A dialog, a terminal line, and a test double
/// all satisfy it. `dispose` is called exactly once on every exit path,
/// success or failure.
pub trait ProgressPresenter: Send + Sync {
    /// Make the surface visible and hand it the bridge to poll. Cancel
    /// requests flow back through [`ProgressBridge::request_cancel`].
    fn show(&self, bridge: ProgressBridge);

    /// Tear the surface down.
    fn dispose(&self);
}

/// Presenter that reports the current status line through the log at a
/// fixed cadence.
pub struct LogPresenter {
    poll_interval: Duration,
    stop: CancellationToken,
}

impl LogPresenter {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            stop: CancellationToken::new(),
        }
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl ProgressPresenter for LogPresenter {
    fn show(&self, bridge: ProgressBridge) {
        let stop = self.stop.clone();
        let poll_interval = self.poll_interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = stop.cancelled() => break,
                    _ = ticker.tick() => info!("{}", bridge.status()),
                }
            }
        });
    }

    fn dispose(&self) {
        self.stop.cancel();
    }
}
