//! ConsoleTarget - writes records to stdout / stderr
//!
//! Routing by level:
//! - `Error` and above go to stderr, uncolored
//! - `Info` / `Warning` go to stdout, wrapped in the level's ANSI color
//! - `Debug` goes to stdout only in debug builds

use std::io::{self, Write};

use contracts::{ContractError, LogTarget, Severity, TargetState};

/// Standard stream chosen for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Target that prints records to the process console
pub struct ConsoleTarget {
    name: String,
    state: TargetState,
    color: bool,
    debug_output: bool,
}

impl ConsoleTarget {
    /// Create a new ConsoleTarget
    ///
    /// Color is on; Debug output follows the build profile.
    pub fn new(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            state: TargetState::new(threshold),
            color: true,
            debug_output: cfg!(debug_assertions),
        }
    }

    /// Toggle ANSI coloring of Info/Warning lines
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Override the debug-build policy for Debug records
    pub fn with_debug_output(mut self, debug_output: bool) -> Self {
        self.debug_output = debug_output;
        self
    }

    /// Decide stream and final text for a record, `None` if it is not printed
    pub fn route(&self, level: Severity, message: &str) -> Option<(ConsoleStream, String)> {
        match level {
            Severity::Error | Severity::Critical | Severity::Fatal => {
                Some((ConsoleStream::Stderr, message.to_string()))
            }
            Severity::Info | Severity::Warning => {
                let text = if self.color {
                    format!("\x1b[{}m{}\x1b[0m", level.color_code(), message)
                } else {
                    message.to_string()
                };
                Some((ConsoleStream::Stdout, text))
            }
            Severity::Debug if self.debug_output => {
                Some((ConsoleStream::Stdout, message.to_string()))
            }
            Severity::Debug => None,
        }
    }

    fn print(&self, stream: ConsoleStream, text: &str) -> io::Result<()> {
        match stream {
            ConsoleStream::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{text}")?;
                out.flush()
            }
            ConsoleStream::Stderr => {
                let mut err = io::stderr().lock();
                writeln!(err, "{text}")?;
                err.flush()
            }
        }
    }
}

impl LogTarget for ConsoleTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> &TargetState {
        &self.state
    }

    fn write(&self, level: Severity, message: &str) -> Result<(), ContractError> {
        if !self.state.is_enabled() {
            return Ok(());
        }
        let Some((stream, text)) = self.route(level, message) else {
            return Ok(());
        };
        self.print(stream, &text)
            .map_err(|e| ContractError::target_write(&self.name, e.to_string()))
    }

    fn flush(&self) -> Result<(), ContractError> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
