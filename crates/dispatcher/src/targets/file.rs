//! FileTarget - appends rendered lines to a text file

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use contracts::{ContractError, LogTarget, Severity, TargetState};

/// Target that appends one line per record and flushes immediately
pub struct FileTarget {
    name: String,
    state: TargetState,
    path: PathBuf,
    file: File,
}

impl FileTarget {
    /// Open (or create) `path` in append mode
    ///
    /// # Errors
    /// `ContractError::TargetOpen` when the file cannot be opened.
    pub fn open(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        threshold: Severity,
    ) -> Result<Self, ContractError> {
        let name = name.into();
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ContractError::target_open(&name, &path, e))?;

        debug!(log_target = %name, path = %path.display(), "FileTarget opened");

        Ok(Self {
            name,
            state: TargetState::new(threshold),
            path,
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, message: &str) -> std::io::Result<()> {
        // One write per line so concurrent appenders never split a record
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');

        let mut file = &self.file;
        file.write_all(line.as_bytes())?;
        file.flush()
    }
}

impl LogTarget for FileTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> &TargetState {
        &self.state
    }

    fn write(&self, _level: Severity, message: &str) -> Result<(), ContractError> {
        if !self.state.is_enabled() {
            return Ok(());
        }
        self.append_line(message)
            .map_err(|e| ContractError::target_write(&self.name, e.to_string()))
    }

    fn flush(&self) -> Result<(), ContractError> {
        let mut file = &self.file;
        file.flush()?;
        Ok(())
    }
}
