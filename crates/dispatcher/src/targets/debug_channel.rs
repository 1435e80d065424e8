//! DebugChannelTarget - forwards records to the platform debugger channel
//!
//! On Windows this is `OutputDebugStringA`; on every other platform the
//! target accepts records and drops them.

use contracts::{ContractError, LogTarget, Severity, TargetState};

/// Target backed by the platform debug-output channel
pub struct DebugChannelTarget {
    name: String,
    state: TargetState,
}

impl DebugChannelTarget {
    pub fn new(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            state: TargetState::new(threshold),
        }
    }

    /// Whether the host platform has a debug channel at all
    pub const fn is_supported() -> bool {
        cfg!(windows)
    }
}

#[cfg(windows)]
fn output_debug_string(text: &str) {
    use std::ffi::CString;
    use windows_sys::Win32::System::Diagnostics::Debug::OutputDebugStringA;

    // Interior NULs would truncate the string on the debugger side
    let bytes: Vec<u8> = text.bytes().filter(|b| *b != 0).collect();
    if let Ok(c_text) = CString::new(bytes) {
        // SAFETY: `c_text` is a valid NUL-terminated buffer alive for the call.
        unsafe { OutputDebugStringA(c_text.as_ptr().cast()) };
    }
}

#[cfg(not(windows))]
fn output_debug_string(_text: &str) {}

impl LogTarget for DebugChannelTarget {
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
        output_debug_string(message);
        output_debug_string("\n");
        Ok(())
    }
}
