//! Configuration validation
//!
//! Rules:
//! - derive-level field rules (`validator`)
//! - target names are unique
//! - file targets carry a non-empty path
//! - `path` only on file targets, `color` only on console targets

use std::collections::HashSet;

use contracts::{ContractError, LoggerBlueprint, TargetKind};
use validator::Validate;

/// Validate a LoggerBlueprint
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    validate_fields(blueprint)?;
    validate_target_names(blueprint)?;
    validate_target_options(blueprint)?;
    Ok(())
}

/// Run the derived field rules
fn validate_fields(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    blueprint
        .validate()
        .map_err(|e| ContractError::config_validation("targets", e.to_string()))
}

/// Target names must be unique
fn validate_target_names(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for target in &blueprint.targets {
        if !seen.insert(target.name.as_str()) {
            return Err(ContractError::config_validation(
                format!("targets[name={}]", target.name),
                "duplicate target name",
            ));
        }
    }
    Ok(())
}

/// Variant-specific options
fn validate_target_options(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    for (idx, target) in blueprint.targets.iter().enumerate() {
        match target.kind {
            TargetKind::File => {
                let has_path = target
                    .path
                    .as_ref()
                    .is_some_and(|p| !p.as_os_str().is_empty());
                if !has_path {
                    return Err(ContractError::config_validation(
                        format!("targets[{idx}].path"),
                        format!("file target '{}' requires a path", target.name),
                    ));
                }
            }
            TargetKind::Console | TargetKind::DebugChannel => {
                if target.path.is_some() {
                    return Err(ContractError::config_validation(
                        format!("targets[{idx}].path"),
                        format!("path is only valid on file targets ('{}')", target.name),
                    ));
                }
            }
        }

        if target.color.is_some() && target.kind != TargetKind::Console {
            return Err(ContractError::config_validation(
                format!("targets[{idx}].color"),
                format!("color is only valid on console targets ('{}')", target.name),
            ));
        }
    }
    Ok(())
}
