//! LoggerBlueprint - Config Loader output
//!
//! Describes the full logger setup: which targets exist, their thresholds,
//! and whether the default console target is kept.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

use crate::Severity;

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete logger configuration blueprint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggerBlueprint {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Prepend a console target at `Debug` before the configured ones
    #[serde(default = "default_true")]
    pub default_console: bool,

    /// Targets in dispatch order
    #[serde(default)]
    #[validate(nested)]
    pub targets: Vec<TargetConfig>,
}

impl Default for LoggerBlueprint {
    fn default() -> Self {
        Self {
            version: ConfigVersion::V1,
            default_console: true,
            targets: Vec::new(),
        }
    }
}

/// One target definition
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TargetConfig {
    /// Target name
    #[validate(length(min = 1, message = "target name cannot be empty"))]
    pub name: String,

    /// Target variant
    pub kind: TargetKind,

    /// Minimum severity written by this target
    #[serde(default = "default_threshold")]
    pub threshold: Severity,

    /// Initial enabled flag
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Destination file (file targets only)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Colorize Info/Warning (console targets only)
    #[serde(default)]
    pub color: Option<bool>,
}

impl TargetConfig {
    /// Console target definition
    pub fn console(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            kind: TargetKind::Console,
            threshold,
            enabled: true,
            path: None,
            color: None,
        }
    }

    /// File target definition
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            kind: TargetKind::File,
            threshold,
            enabled: true,
            path: Some(path.into()),
            color: None,
        }
    }

    /// Debug-channel target definition
    pub fn debug_channel(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            kind: TargetKind::DebugChannel,
            threshold,
            enabled: true,
            path: None,
            color: None,
        }
    }
}

fn default_threshold() -> Severity {
    Severity::Debug
}

fn default_true() -> bool {
    true
}

/// Target variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// stdout / stderr
    Console,
    /// Append-mode text file
    File,
    /// Platform debugger output (Windows only, no-op elsewhere)
    DebugChannel,
}
