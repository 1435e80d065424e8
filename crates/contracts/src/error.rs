//! Layered error definitions
//!
//! Categorized by source: config / target

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Target Errors =====
    /// Target destination could not be opened
    #[error("target '{name}' cannot open {}: {source}", path.display())]
    TargetOpen {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target write error
    #[error("target '{target}' write error: {message}")]
    TargetWrite { target: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create target open error
    pub fn target_open(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::TargetOpen {
            name: name.into(),
            path: path.into(),
            source,
        }
    }

    /// Create target write error
    pub fn target_write(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TargetWrite {
            target: target.into(),
            message: message.into(),
        }
    }
}
