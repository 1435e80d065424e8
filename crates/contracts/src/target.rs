//! LogTarget trait - Dispatcher output interface
//!
//! Defines the abstract interface for log targets.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{ContractError, Severity};

/// Threshold and enabled flag shared by every target variant.
///
/// The threshold is fixed at construction; the flag flips between
/// Enabled and Disabled and has no other states.
#[derive(Debug)]
pub struct TargetState {
    threshold: Severity,
    enabled: AtomicBool,
}

impl TargetState {
    /// Create an enabled state with the given threshold
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold,
            enabled: AtomicBool::new(true),
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// `level >= threshold`, regardless of the enabled flag
    pub fn applicable(&self, level: Severity) -> bool {
        level >= self.threshold
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }
}

/// Log output trait
///
/// All target implementations must implement this trait. Targets are shared
/// as `Arc<dyn LogTarget>` between the caller that built them and the
/// dispatcher registry, so every method takes `&self`.
pub trait LogTarget: Send + Sync {
    /// Target name (used for diagnostics/metrics)
    fn name(&self) -> &str;

    /// Threshold and enabled flag
    fn state(&self) -> &TargetState;

    /// Write one rendered message
    ///
    /// Must be a no-op while the target is disabled.
    ///
    /// # Errors
    /// Returns write error (should include context). The dispatcher swallows it.
    fn write(&self, level: Severity, message: &str) -> Result<(), ContractError>;

    /// Flush buffered output (if any)
    fn flush(&self) -> Result<(), ContractError> {
        Ok(())
    }

    fn threshold(&self) -> Severity {
        self.state().threshold()
    }

    /// Whether a record at `level` meets this target's threshold
    fn applicable(&self, level: Severity) -> bool {
        self.state().applicable(level)
    }

    fn is_enabled(&self) -> bool {
        self.state().is_enabled()
    }

    fn enable(&self) {
        self.state().set_enabled(true);
    }

    fn disable(&self) {
        self.state().set_enabled(false);
    }
}
