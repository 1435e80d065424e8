//! Dispatcher - synchronized registry fanning records out to targets

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

use contracts::{
    CallSite, LogRecord, LogTarget, LoggerBlueprint, Severity, TargetConfig, TargetKind,
};

use crate::error::{CriticalError, DispatcherError, Escalation};
use crate::handle::TargetHandle;
use crate::metrics::MetricsSnapshot;
use crate::render::render;
use crate::targets::{ConsoleTarget, DebugChannelTarget, FileTarget};

/// Exit status used when a Fatal record terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// Name of the console target every default dispatcher starts with
pub const DEFAULT_CONSOLE_NAME: &str = "console";

/// Name of the debug-channel target added on platforms that have one
pub const DEFAULT_DEBUG_CHANNEL_NAME: &str = "debug-channel";

/// Builder for creating a Dispatcher from a blueprint
pub struct DispatcherBuilder {
    blueprint: LoggerBlueprint,
    extra: Vec<Arc<dyn LogTarget>>,
}

impl DispatcherBuilder {
    /// Create a new DispatcherBuilder
    pub fn new(blueprint: LoggerBlueprint) -> Self {
        Self {
            blueprint,
            extra: Vec::new(),
        }
    }

    /// Register an already constructed target after the configured ones
    pub fn with_target(mut self, target: Arc<dyn LogTarget>) -> Self {
        self.extra.push(target);
        self
    }

    /// Open every target and build the dispatcher
    ///
    /// # Errors
    /// `DispatcherError::TargetCreation` naming the first target that cannot be opened.
    #[instrument(
        name = "dispatcher_builder_build",
        skip(self),
        fields(target_count = self.blueprint.targets.len())
    )]
    pub fn build(self) -> Result<Dispatcher, DispatcherError> {
        let dispatcher = Dispatcher::new();

        if self.blueprint.default_console {
            dispatcher.register_target(Arc::new(ConsoleTarget::new(
                DEFAULT_CONSOLE_NAME,
                Severity::Debug,
            )));
        }
        for config in &self.blueprint.targets {
            dispatcher.register_target(create_target(config)?);
        }
        for target in self.extra {
            dispatcher.register_target(target);
        }

        info!(targets = dispatcher.len(), "Dispatcher built");
        Ok(dispatcher)
    }
}

/// Create a target from configuration
#[instrument(
    name = "dispatcher_create_target",
    skip(config),
    fields(log_target = %config.name, kind = ?config.kind)
)]
pub fn create_target(config: &TargetConfig) -> Result<Arc<dyn LogTarget>, DispatcherError> {
    let target: Arc<dyn LogTarget> = match config.kind {
        TargetKind::Console => Arc::new(
            ConsoleTarget::new(&config.name, config.threshold)
                .with_color(config.color.unwrap_or(true)),
        ),
        TargetKind::File => {
            let path = config.path.as_ref().ok_or_else(|| {
                DispatcherError::target_creation(&config.name, "file target requires a path")
            })?;
            let target = FileTarget::open(&config.name, path, config.threshold)
                .map_err(|e| DispatcherError::target_creation(&config.name, e.to_string()))?;
            Arc::new(target)
        }
        TargetKind::DebugChannel => {
            Arc::new(DebugChannelTarget::new(&config.name, config.threshold))
        }
    };

    if !config.enabled {
        target.disable();
    }
    Ok(target)
}

/// Convenience function to create a dispatcher from a blueprint
pub fn create_dispatcher(blueprint: LoggerBlueprint) -> Result<Dispatcher, DispatcherError> {
    DispatcherBuilder::new(blueprint).build()
}

/// Registry of targets, dispatched in registration order.
///
/// One lock serializes `emit`, `register_target`, `enable_all` and
/// `disable_all`, so each record reaches every target before the next begins.
pub struct Dispatcher {
    registry: Mutex<Vec<TargetHandle>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.lock().iter().map(|h| h.name().to_string()).collect();
        f.debug_struct("Dispatcher").field("targets", &names).finish()
    }
}

impl Dispatcher {
    /// Create a dispatcher with no targets
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Vec::new()),
        }
    }

    /// Create a dispatcher holding the default console target (and the
    /// debug-channel target where the platform has one), both at `Debug`
    pub fn with_default_targets() -> Self {
        let dispatcher = Self::new();
        dispatcher.register_target(Arc::new(ConsoleTarget::new(
            DEFAULT_CONSOLE_NAME,
            Severity::Debug,
        )));
        if DebugChannelTarget::is_supported() {
            dispatcher.register_target(Arc::new(DebugChannelTarget::new(
                DEFAULT_DEBUG_CHANNEL_NAME,
                Severity::Debug,
            )));
        }
        dispatcher
    }

    // A panic inside a target leaves the Vec intact, so poisoning is ignored
    fn lock(&self) -> MutexGuard<'_, Vec<TargetHandle>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a target; no deduplication
    pub fn register_target(&self, target: Arc<dyn LogTarget>) {
        let handle = TargetHandle::new(target);
        debug!(
            log_target = %handle.name(),
            threshold = %handle.target().threshold(),
            "Target registered"
        );
        self.lock().push(handle);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the registered targets, in dispatch order
    pub fn targets(&self) -> Vec<Arc<dyn LogTarget>> {
        self.lock().iter().map(|h| Arc::clone(h.target())).collect()
    }

    /// Get metrics for all targets
    pub fn metrics(&self) -> Vec<(String, MetricsSnapshot)> {
        self.lock()
            .iter()
            .map(|h| (h.name().to_string(), h.metrics().snapshot()))
            .collect()
    }

    /// Enable every registered target
    pub fn enable_all(&self) {
        let registry = self.lock();
        for handle in registry.iter() {
            handle.target().enable();
        }
        debug!(targets = registry.len(), "All targets enabled");
    }

    /// Disable every registered target; membership and order are kept
    pub fn disable_all(&self) {
        let registry = self.lock();
        for handle in registry.iter() {
            handle.target().disable();
        }
        debug!(targets = registry.len(), "All targets disabled");
    }

    /// Render and fan out a record, then report its escalation.
    ///
    /// Never terminates the process; `emit` is the terminating form.
    pub fn dispatch(&self, record: &LogRecord) -> Result<(), Escalation> {
        let text = render(record);
        self.fan_out(record.level, &text);
        escalation(record.level, &record.message)
    }

    /// Fan out an already rendered line, then report its escalation
    pub fn dispatch_rendered(&self, level: Severity, text: &str) -> Result<(), Escalation> {
        self.fan_out(level, text);
        escalation(level, text)
    }

    /// Log one message.
    ///
    /// Returns `Err` only for `Critical`, after every applicable target wrote
    /// the record. A `Fatal` record is written, targets are flushed, and the
    /// process exits with [`FATAL_EXIT_CODE`].
    pub fn emit(
        &self,
        level: Severity,
        message: &str,
        call_site: CallSite,
    ) -> Result<(), CriticalError> {
        self.emit_record(&LogRecord::new(level, message, call_site))
    }

    /// `emit` for a prepared record
    pub fn emit_record(&self, record: &LogRecord) -> Result<(), CriticalError> {
        self.realize(self.dispatch(record))
    }

    /// `emit` for an already rendered line; a Critical error carries `text`
    pub fn emit_rendered(&self, level: Severity, text: &str) -> Result<(), CriticalError> {
        self.realize(self.dispatch_rendered(level, text))
    }

    /// Log at `Fatal` and terminate
    pub fn emit_fatal(&self, message: &str, call_site: CallSite) -> ! {
        let record = LogRecord::new(Severity::Fatal, message, call_site);
        let text = render(&record);
        self.fan_out(Severity::Fatal, &text);
        self.terminate()
    }

    /// Flush every target, swallowing errors
    pub fn flush_all(&self) {
        for handle in self.lock().iter() {
            handle.flush();
        }
    }

    fn fan_out(&self, level: Severity, text: &str) {
        let registry = self.lock();
        for handle in registry.iter() {
            handle.deliver(level, text);
        }
    }

    fn realize(&self, outcome: Result<(), Escalation>) -> Result<(), CriticalError> {
        match outcome {
            Ok(()) => Ok(()),
            Err(Escalation::Critical { message }) => Err(CriticalError { message }),
            Err(Escalation::Fatal { .. }) => self.terminate(),
        }
    }

    fn terminate(&self) -> ! {
        self.flush_all();
        debug!(code = FATAL_EXIT_CODE, "Fatal record written, exiting");
        std::process::exit(FATAL_EXIT_CODE)
    }
}

fn escalation(level: Severity, message: &str) -> Result<(), Escalation> {
    match level {
        Severity::Critical => Err(Escalation::Critical {
            message: message.to_string(),
        }),
        Severity::Fatal => Err(Escalation::Fatal {
            message: message.to_string(),
        }),
        _ => Ok(()),
    }
}
