//! `emit` command implementation.

use std::time::Instant;

use anyhow::Result;
use dispatcher::{call_site, Dispatcher, DispatcherBuilder};
use observability::EmitMetricsAggregator;
use tracing::{debug, info};

use crate::cli::EmitArgs;
use crate::error::CliError;

/// Execute the `emit` command
///
/// Critical surfaces as a command error after the message is written.
/// Fatal terminates the process from inside the dispatcher.
pub fn run_emit(args: &EmitArgs) -> Result<()> {
    let dispatcher = build_dispatcher(args)?;
    dispatcher::install(dispatcher).map_err(|_| CliError::AlreadyInstalled)?;
    let dispatcher = dispatcher::global();

    info!(
        level = %args.level,
        repeat = args.repeat,
        targets = dispatcher.len(),
        "Emitting"
    );

    let text = args.text();
    let mut aggregator = EmitMetricsAggregator::new();
    let mut outcome = Ok(());

    for _ in 0..args.repeat {
        let started = Instant::now();
        let result = dispatcher.emit(args.level, &text, call_site!());
        aggregator.update(args.level, started.elapsed().as_secs_f64() * 1e6);

        if let Err(critical) = result {
            outcome = Err(CliError::from(critical));
            break;
        }
    }

    for (name, snapshot) in dispatcher.metrics() {
        aggregator.observe_target(&name, snapshot);
    }
    if args.stats {
        eprint!("{}", aggregator.summary());
    }
    debug!(emitted = aggregator.total(), "Emit finished");

    Ok(outcome?)
}

fn build_dispatcher(args: &EmitArgs) -> Result<Dispatcher, CliError> {
    let Some(path) = &args.config else {
        return Ok(Dispatcher::with_default_targets());
    };

    if !path.exists() {
        return Err(CliError::config_not_found(path));
    }

    let blueprint = config_loader::ConfigLoader::load_from_path(path)
        .map_err(|e| CliError::config_load(path, e))?;

    info!(
        config = %path.display(),
        targets = blueprint.targets.len(),
        "Configuration loaded"
    );

    Ok(DispatcherBuilder::new(blueprint).build()?)
}
