//! Severity - ordered urgency of a log record
//!
//! The order drives both target filtering and the dispatcher's
//! post-dispatch policy (Critical / Fatal escalation).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Log severity, ordered by increasing urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    /// Recorded, then surfaced to the caller as a recoverable error
    Critical,
    /// Recorded, then the process terminates
    Fatal,
}

impl Severity {
    /// All severities, lowest first
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Fatal,
    ];

    /// Upper-case label used in rendered lines
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Fatal => "FATAL",
        }
    }

    /// ANSI SGR color code for console output (0 = reset)
    pub const fn color_code(self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Info => 32,
            Severity::Warning => 33,
            Severity::Error => 35,
            Severity::Critical | Severity::Fatal => 31,
        }
    }

    /// Whether emitting at this level escalates past the fan-out
    pub const fn escalates(self) -> bool {
        matches!(self, Severity::Critical | Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known severity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}'")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
