//! Target metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for a single registered target
#[derive(Debug, Default)]
pub struct TargetMetrics {
    /// Records written successfully
    written: AtomicU64,
    /// Records below the target's threshold
    filtered: AtomicU64,
    /// Records skipped because the target was disabled
    suppressed: AtomicU64,
    /// Write failures swallowed by the dispatcher
    failures: AtomicU64,
}

impl TargetMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    pub fn inc_written(&self) {
        self.written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    pub fn inc_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    pub fn inc_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn inc_failures(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            written: self.written(),
            filtered: self.filtered(),
            suppressed: self.suppressed(),
            failures: self.failures(),
        }
    }
}

/// Snapshot of target metrics (for reporting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub written: u64,
    pub filtered: u64,
    pub suppressed: u64,
    pub failures: u64,
}

impl MetricsSnapshot {
    /// Every record the target was offered
    pub fn offered(&self) -> u64 {
        self.written + self.filtered + self.suppressed + self.failures
    }
}
