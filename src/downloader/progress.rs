//! Shared byte-progress state for one in-flight transfer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel reported while received bytes cannot be related to a total:
/// no transfer active, or the content length is unknown.
pub const PROGRESS_UNKNOWN: f64 = -1.0;

/// Byte counters for a single transfer, written by the download worker
/// and read by any number of status consumers. Last-writer-wins; both
/// sides touch plain scalars, so relaxed ordering is enough.
#[derive(Debug, Default)]
pub struct TransferProgress {
    received: AtomicU64,
    // 0 while the content length is unknown
    total: AtomicU64,
}

impl TransferProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total(&self, total: u64) {
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn add_received(&self, bytes: u64) {
        self.received.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Fraction in [0, 1], or [`PROGRESS_UNKNOWN`].
    pub fn fraction(&self) -> f64 {
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            return PROGRESS_UNKNOWN;
        }
        let received = self.received.load(Ordering::Relaxed);
        (received as f64 / total as f64).min(1.0)
    }
}
