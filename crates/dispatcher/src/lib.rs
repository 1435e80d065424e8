//! # Dispatcher
//!
//! Log dispatch module.
//!
//! Responsibilities:
//! - Keep the ordered registry of targets behind one lock
//! - Fan each record out to every enabled target whose threshold it meets
//! - Escalate after the fan-out: `Critical` returns an error, `Fatal` exits
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use dispatcher::{log_info_to, Dispatcher, FileTarget, Severity};
//!
//! let dispatcher = Dispatcher::with_default_targets();
//! let file = FileTarget::open("app", "app.log", Severity::Info).unwrap();
//! dispatcher.register_target(Arc::new(file));
//!
//! log_info_to!(&dispatcher, "listening on {}", 8080);
//! ```

pub mod dispatcher;
pub mod error;
pub mod global;
pub mod handle;
mod macros;
pub mod metrics;
pub mod render;
pub mod targets;

pub use contracts::{CallSite, LogRecord, LogTarget, Severity, TargetState};
pub use dispatcher::{
    create_dispatcher, create_target, Dispatcher, DispatcherBuilder, DEFAULT_CONSOLE_NAME,
    DEFAULT_DEBUG_CHANNEL_NAME, FATAL_EXIT_CODE,
};
pub use error::{CriticalError, DispatcherError, Escalation};
pub use global::{global, install};
pub use handle::{Delivery, TargetHandle};
pub use metrics::{MetricsSnapshot, TargetMetrics};
pub use render::render;
pub use targets::{ConsoleStream, ConsoleTarget, DebugChannelTarget, FileTarget};
