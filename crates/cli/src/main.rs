//! # fanlog CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - Emitting messages through configured targets
//! - Configuration validation
//! - Target listing

mod cli;
mod commands;
mod error;

use anyhow::Result;
use clap::Parser;
use observability::ObservabilityConfig;
use tracing::debug;

use cli::{Cli, Commands};
use commands::{run_emit, run_info, run_validate};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&cli)?;

    debug!(version = env!("CARGO_PKG_VERSION"), "fanlog starting");

    let result = match &cli.command {
        Commands::Emit(args) => run_emit(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Info(args) => run_info(args),
    };

    if let Err(ref e) = result {
        debug!(error = %e, "Command failed");
    }

    result
}

/// Initialize diagnostics based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    let default_log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    observability::init_with_config(ObservabilityConfig {
        log_format: cli.log_format.into(),
        default_log_level: default_log_level.to_string(),
    })
}
