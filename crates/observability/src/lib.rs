//! # Observability
//!
//! Diagnostics for the fanlog crates themselves: a `tracing` subscriber for
//! lifecycle events and `metrics` counters for emit activity.
//!
//! Diagnostics go to stderr and never through the dispatcher's fan-out.
//!
//! ## Example
//!
//! ```no_run
//! use observability::{init_with_config, LogFormat, ObservabilityConfig};
//!
//! init_with_config(ObservabilityConfig {
//!     log_format: LogFormat::Compact,
//!     default_log_level: "debug".to_string(),
//! })
//! .unwrap();
//! ```

pub mod metrics;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use crate::metrics::{
    record_emit_latency_us, record_escalation, record_message_emitted, record_target_snapshot,
    EmitMetricsAggregator, MetricsSummary, RunningStats, StatsSummary,
};

/// Initialize tracing with the default configuration
///
/// JSON lines on stderr, `RUST_LOG` honored.
pub fn init() -> Result<()> {
    init_with_config(ObservabilityConfig::default())
}

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_format: LogFormat,
    /// Used when `RUST_LOG` is unset or invalid
    pub default_log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            default_log_level: "warn".to_string(),
        }
    }
}

/// Diagnostic output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logs
    #[default]
    Json,
    /// Human readable
    Pretty,
    /// Compact single line
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => anyhow::bail!("unknown log format '{other}' (expected json, pretty or compact)"),
        }
    }
}

/// Initialize tracing with a custom configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_with_config(config: ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_log_level));

    match config.log_format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer().pretty().with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
    }

    tracing::debug!(
        log_format = ?config.log_format,
        default_log_level = %config.default_log_level,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_log_level, "warn");
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_second_init_fails() {
        let config = ObservabilityConfig {
            log_format: LogFormat::Compact,
            default_log_level: "off".to_string(),
        };
        // The first call may race another test's subscriber; the second must fail either way.
        let _ = init_with_config(config.clone());
        assert!(init_with_config(config).is_err());
    }
}
