//! Dispatcher error types

use thiserror::Error;

/// Dispatcher-specific errors
#[derive(Debug, Error)]
pub enum DispatcherError {
    /// Target creation error
    #[error("failed to create target '{name}': {message}")]
    TargetCreation { name: String, message: String },

    /// Target error (from contract)
    #[error("target error: {0}")]
    Contract(#[from] contracts::ContractError),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatcherError {
    /// Create a target creation error
    pub fn target_creation(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TargetCreation {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Raised to the caller after a Critical record has been written to every
/// applicable target. Carries the original message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CriticalError {
    pub message: String,
}

/// Post-dispatch outcome of an escalating severity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Escalation {
    /// Recoverable: the caller decides whether to unwind further
    #[error("critical: {message}")]
    Critical { message: String },

    /// Unrecoverable: the process must terminate
    #[error("fatal: {message}")]
    Fatal { message: String },
}

impl Escalation {
    pub fn message(&self) -> &str {
        match self {
            Escalation::Critical { message } | Escalation::Fatal { message } => message,
        }
    }
}
