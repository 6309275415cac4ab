//! Progress reporting for long batches.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

/// Callback invoked after each run of a batch.
///
/// Takes `&self` and must be `Sync`: with the `parallel` feature, runs finish
/// on several threads at once and in no particular order.  `completed` counts
/// finished runs, so each value in `1..=total` is reported exactly once.
///
/// Observers only watch; nothing they do can change a batch's result.
pub trait BatchObserver: Sync {
    fn on_sample(&self, _completed: usize, _total: usize) {}
}

/// A [`BatchObserver`] that does nothing.
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Lock-free counter a UI thread can poll while a batch runs elsewhere.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    completed: AtomicUsize,
    total:     AtomicUsize,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Completed share in `[0, 1]`; `0` before the first report.
    pub fn fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.completed() as f64 / total as f64,
        }
    }
}

impl BatchObserver for ProgressCounter {
    fn on_sample(&self, completed: usize, total: usize) {
        self.total.store(total, Ordering::Relaxed);
        self.completed.fetch_max(completed, Ordering::Relaxed);
    }
}

/// Logs an `info` line at every whole percent of progress.
pub struct LogProgress {
    label: &'static str,
}

impl LogProgress {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl BatchObserver for LogProgress {
    fn on_sample(&self, completed: usize, total: usize) {
        let step = (total / 100).max(1);
        if completed % step == 0 || completed == total {
            let percent = completed * 100 / total;
            info!(batch = self.label, completed, total, percent, "progress");
        }
    }
}
