//! Bridge between the download worker and its status consumers.

use crate::downloader::models::TaskState;
use crate::downloader::progress::{PROGRESS_UNKNOWN, TransferProgress};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, RwLock};
use tokio_util::sync::CancellationToken;

/// Cheaply clonable handle shared between the worker, the presentation
/// surface, and anything else that wants to read status or request
/// cancellation. Reads are valid before the worker starts and after it
/// terminates; without an active transfer they report the sentinel.
#[derive(Clone)]
pub struct ProgressBridge {
    inner: Arc<BridgeInner>,
}

struct BridgeInner {
    product_name: String,
    state: AtomicU8,
    transfer: RwLock<Option<Arc<TransferProgress>>>,
    cancel: CancellationToken,
}

impl ProgressBridge {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                product_name: product_name.into(),
                state: AtomicU8::new(TaskState::Idle as u8),
                transfer: RwLock::new(None),
                cancel: CancellationToken::new(),
            }),
        }
    }

    pub fn state(&self) -> TaskState {
        TaskState::from_u8(self.inner.state.load(Ordering::Relaxed))
    }

    pub(crate) fn set_state(&self, state: TaskState) {
        self.inner.state.store(state as u8, Ordering::Relaxed);
    }

    /// Install a fresh transfer for the status side to report on.
    pub(crate) fn begin_transfer(&self) -> Arc<TransferProgress> {
        let progress = Arc::new(TransferProgress::new());
        *self.inner.transfer.write().expect("transfer slot poisoned") = Some(progress.clone());
        progress
    }

    /// Drop the active transfer; `progress()` reports the sentinel again.
    pub(crate) fn clear_transfer(&self) {
        *self.inner.transfer.write().expect("transfer slot poisoned") = None;
    }

    /// Ask the worker to stop at its next checkpoint.
    pub fn request_cancel(&self) {
        self.inner.cancel.cancel();
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    pub(crate) fn cancel_token(&self) -> &CancellationToken {
        &self.inner.cancel
    }

    /// Active transfer's fraction in [0, 1], or the sentinel when no
    /// transfer is active or its length is unknown.
    pub fn progress(&self) -> f64 {
        self.inner
            .transfer
            .read()
            .expect("transfer slot poisoned")
            .as_ref()
            .map(|transfer| transfer.fraction())
            .unwrap_or(PROGRESS_UNKNOWN)
    }

    /// Human-readable status line.
    pub fn status(&self) -> String {
        let fraction = self.progress();
        if fraction >= 0.0 {
            format!(
                "Downloading latest {} ({:.2}%)...",
                self.inner.product_name,
                fraction * 100.0
            )
        } else {
            format!("Downloading latest {}...", self.inner.product_name)
        }
    }
}
