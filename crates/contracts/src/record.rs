//! LogRecord - Dispatcher input
//!
//! One log call: severity, message text and where it came from.

use chrono::{DateTime, Local};

use crate::Severity;

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Enclosing function or module path
    pub function: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Placeholder for records not produced by a macro
    pub const fn unknown() -> Self {
        Self::new("?", "?", 0)
    }
}

/// A single log call, before rendering
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Severity,
    /// Message text (already argument-substituted)
    pub message: String,
    pub call_site: CallSite,
    /// Local wall-clock time of the call
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(level: Severity, message: impl Into<String>, call_site: CallSite) -> Self {
        Self {
            level,
            message: message.into(),
            call_site,
            timestamp: Local::now(),
        }
    }

    /// Replace the timestamp (for deterministic rendering)
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
