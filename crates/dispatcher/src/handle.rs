//! TargetHandle - registry entry pairing a shared target with its metrics

use std::sync::Arc;
use tracing::warn;

use contracts::{LogTarget, Severity};

use crate::metrics::TargetMetrics;

/// What happened when a record was offered to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Written,
    /// Below the target's threshold
    Filtered,
    /// Target disabled
    Suppressed,
    /// Write failed and was swallowed
    Failed,
}

/// Handle to a registered target
#[derive(Clone)]
pub struct TargetHandle {
    /// Target shared with whoever constructed it
    target: Arc<dyn LogTarget>,
    /// Shared metrics
    metrics: Arc<TargetMetrics>,
}

impl TargetHandle {
    pub fn new(target: Arc<dyn LogTarget>) -> Self {
        Self {
            target,
            metrics: Arc::new(TargetMetrics::new()),
        }
    }

    /// Get target name
    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn target(&self) -> &Arc<dyn LogTarget> {
        &self.target
    }

    /// Get current metrics
    pub fn metrics(&self) -> &Arc<TargetMetrics> {
        &self.metrics
    }

    /// Offer one rendered line to the target.
    ///
    /// Never fails: write errors are counted and traced, then dropped.
    pub fn deliver(&self, level: Severity, text: &str) -> Delivery {
        if !self.target.is_enabled() {
            self.metrics.inc_suppressed();
            return Delivery::Suppressed;
        }
        if !self.target.applicable(level) {
            self.metrics.inc_filtered();
            return Delivery::Filtered;
        }

        match self.target.write(level, text) {
            Ok(()) => {
                self.metrics.inc_written();
                Delivery::Written
            }
            Err(e) => {
                self.metrics.inc_failures();
                warn!(log_target = %self.name(), error = %e, "Write failed, record dropped");
                Delivery::Failed
            }
        }
    }

    /// Flush the target, swallowing errors
    pub fn flush(&self) {
        if let Err(e) = self.target.flush() {
            warn!(log_target = %self.name(), error = %e, "Flush failed");
        }
    }
}
