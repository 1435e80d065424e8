//! `validate` command implementation.

use anyhow::{Context, Result};
use contracts::{LoggerBlueprint, TargetKind};
use dispatcher::DebugChannelTarget;
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    version: String,
    default_console: bool,
    target_count: usize,
    console_count: usize,
    file_count: usize,
    debug_channel_count: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(blueprint) => {
            let warnings = collect_warnings(&blueprint);
            let count = |kind: TargetKind| {
                blueprint
                    .targets
                    .iter()
                    .filter(|t| t.kind == kind)
                    .count()
            };

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    version: format!("{:?}", blueprint.version),
                    default_console: blueprint.default_console,
                    target_count: blueprint.targets.len(),
                    console_count: count(TargetKind::Console),
                    file_count: count(TargetKind::File),
                    debug_channel_count: count(TargetKind::DebugChannel),
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(blueprint: &LoggerBlueprint) -> Vec<String> {
    let mut warnings = Vec::new();

    if blueprint.targets.is_empty() && !blueprint.default_console {
        warnings.push("No targets configured - every message will be dropped".to_string());
    }

    for target in &blueprint.targets {
        if !target.enabled {
            warnings.push(format!("Target '{}' starts disabled", target.name));
        }

        match target.kind {
            TargetKind::File => {
                let missing_parent = target
                    .path
                    .as_deref()
                    .and_then(|p| p.parent())
                    .is_some_and(|dir| !dir.as_os_str().is_empty() && !dir.exists());
                if missing_parent {
                    warnings.push(format!(
                        "Target '{}' writes into a directory that does not exist",
                        target.name
                    ));
                }
            }
            TargetKind::DebugChannel if !DebugChannelTarget::is_supported() => {
                warnings.push(format!(
                    "Target '{}' is a debug channel, which discards output on this platform",
                    target.name
                ));
            }
            _ => {}
        }
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  Default console: {}", summary.default_console);
            println!("  Targets: {}", summary.target_count);
            println!("    console: {}", summary.console_count);
            println!("    file: {}", summary.file_count);
            println!("    debug_channel: {}", summary.debug_channel_count);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
