//! Error types for CLI operations.

use std::path::PathBuf;

use dispatcher::{CriticalError, DispatcherError};
use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file not found
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration could not be loaded or failed validation
    #[error("Failed to load configuration from {}: {source}", path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: contracts::ContractError,
    },

    /// Dispatcher could not be assembled from the configuration
    #[error("Failed to build dispatcher: {0}")]
    Build(#[from] DispatcherError),

    /// A Critical message was emitted
    #[error("Critical message emitted: {0}")]
    Critical(#[from] CriticalError),

    /// The process-wide dispatcher was already installed
    #[error("Process-wide dispatcher already installed")]
    AlreadyInstalled,
}

impl CliError {
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn config_load(path: impl Into<PathBuf>, source: contracts::ContractError) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            source,
        }
    }
}
