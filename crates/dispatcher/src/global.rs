//! Process-wide dispatcher
//!
//! Initialized on first use with [`Dispatcher::with_default_targets`], or
//! with a caller-built dispatcher via [`install`] before any log call.

use std::sync::{Arc, OnceLock};

use contracts::{CallSite, LogTarget, Severity};

use crate::dispatcher::Dispatcher;
use crate::error::CriticalError;

static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();

/// The process-wide dispatcher
pub fn global() -> &'static Dispatcher {
    GLOBAL.get_or_init(Dispatcher::with_default_targets)
}

/// Install `dispatcher` as the process-wide instance.
///
/// # Errors
/// Hands the dispatcher back if the global one was already initialized.
pub fn install(dispatcher: Dispatcher) -> Result<(), Dispatcher> {
    GLOBAL.set(dispatcher)
}

/// Register a target on the process-wide dispatcher
pub fn register_target(target: Arc<dyn LogTarget>) {
    global().register_target(target);
}

/// Emit on the process-wide dispatcher
pub fn emit(level: Severity, message: &str, call_site: CallSite) -> Result<(), CriticalError> {
    global().emit(level, message, call_site)
}

pub fn enable_all() {
    global().enable_all();
}

pub fn disable_all() {
    global().disable_all();
}
