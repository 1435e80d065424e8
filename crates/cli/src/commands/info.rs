//! `info` command implementation.

use anyhow::{Context, Result};
use contracts::{LoggerBlueprint, TargetConfig, TargetKind};
use dispatcher::DEFAULT_CONSOLE_NAME;
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    default_console: bool,
    /// Registration order, which is also dispatch order
    targets: Vec<TargetInfo>,
}

#[derive(Serialize)]
struct TargetInfo {
    name: String,
    kind: TargetKind,
    threshold: String,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<bool>,
}

impl From<&TargetConfig> for TargetInfo {
    fn from(config: &TargetConfig) -> Self {
        Self {
            name: config.name.clone(),
            kind: config.kind,
            threshold: config.threshold.label().to_string(),
            enabled: config.enabled,
            path: config.path.as_ref().map(|p| p.display().to_string()),
            color: match config.kind {
                TargetKind::Console => Some(config.color.unwrap_or(true)),
                _ => None,
            },
        }
    }
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let info = build_config_info(&blueprint);
    if args.json {
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print_config_info(&info);
    }

    Ok(())
}

/// Effective target list, with the implicit console first
fn build_config_info(blueprint: &LoggerBlueprint) -> ConfigInfo {
    let mut targets = Vec::with_capacity(blueprint.targets.len() + 1);
    if blueprint.default_console {
        targets.push(TargetInfo::from(&TargetConfig::console(
            DEFAULT_CONSOLE_NAME,
            contracts::Severity::Debug,
        )));
    }
    targets.extend(blueprint.targets.iter().map(TargetInfo::from));

    ConfigInfo {
        version: format!("{:?}", blueprint.version),
        default_console: blueprint.default_console,
        targets,
    }
}

fn print_config_info(info: &ConfigInfo) {
    println!("fanlog configuration ({})", info.version);
    println!("Targets ({}), in dispatch order:", info.targets.len());

    for (i, target) in info.targets.iter().enumerate() {
        let prefix = if i + 1 == info.targets.len() {
            "└─"
        } else {
            "├─"
        };
        let state = if target.enabled { "" } else { " [disabled]" };
        let detail = match (&target.path, target.color) {
            (Some(path), _) => format!(" -> {path}"),
            (None, Some(false)) => " (no color)".to_string(),
            _ => String::new(),
        };
        println!(
            "  {} {} {:?} >= {}{}{}",
            prefix, target.name, target.kind, target.threshold, detail, state
        );
    }
}
