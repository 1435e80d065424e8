//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use contracts::Severity;
use std::path::PathBuf;

/// fanlog - leveled logging fanned out to console, file and debugger targets
#[derive(Parser, Debug)]
#[command(
    name = "fanlog",
    author,
    version,
    about = "Leveled logger with per-target thresholds",
    long_about = "Emit log messages through a dispatcher built from a target configuration.\n\n\
                  Each target (console, file, debug channel) has its own minimum severity.\n\
                  Critical messages end the command with an error, Fatal messages end the process."
)]
pub struct Cli {
    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "FANLOG_VERBOSE")]
    pub verbose: u8,

    /// Only report diagnostic errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Diagnostic output format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        global = true,
        env = "FANLOG_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit a message through the configured targets
    Emit(EmitArgs),

    /// Validate configuration file without emitting
    Validate(ValidateArgs),

    /// Display configured targets
    Info(InfoArgs),
}

/// Arguments for the `emit` command
#[derive(Parser, Debug, Clone)]
pub struct EmitArgs {
    /// Path to configuration file (TOML or JSON); default targets when omitted
    #[arg(short, long, env = "FANLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Severity of the message
    #[arg(short, long, default_value = "info")]
    pub level: Severity,

    /// Emit the message this many times
    #[arg(long, default_value = "1")]
    pub repeat: u32,

    /// Print per-target delivery counters to stderr afterwards
    #[arg(long)]
    pub stats: bool,

    /// Message text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl EmitArgs {
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "fanlog.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "fanlog.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Diagnostic output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_args_parse() {
        let cli = Cli::try_parse_from([
            "fanlog", "emit", "-c", "app.toml", "-l", "warn", "--repeat", "3", "disk", "almost",
            "full",
        ])
        .unwrap();

        let Commands::Emit(args) = cli.command else {
            panic!("expected emit");
        };
        assert_eq!(args.level, Severity::Warning);
        assert_eq!(args.repeat, 3);
        assert_eq!(args.text(), "disk almost full");
        assert_eq!(args.config, Some(PathBuf::from("app.toml")));
    }

    #[test]
    fn test_emit_defaults() {
        let cli = Cli::try_parse_from(["fanlog", "emit", "hello"]).unwrap();
        let Commands::Emit(args) = cli.command else {
            panic!("expected emit");
        };
        assert_eq!(args.level, Severity::Info);
        assert_eq!(args.repeat, 1);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(Cli::try_parse_from(["fanlog", "emit", "-l", "loud", "x"]).is_err());
    }

    #[test]
    fn test_emit_requires_message() {
        assert!(Cli::try_parse_from(["fanlog", "emit", "-l", "info"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["fanlog", "-q", "-v", "info"]).is_err());
    }
}
