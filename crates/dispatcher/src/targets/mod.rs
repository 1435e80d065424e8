//! Target implementations
//!
//! Contains ConsoleTarget, FileTarget, and DebugChannelTarget.

mod console;
mod debug_channel;
mod file;

pub use self::console::{ConsoleStream, ConsoleTarget};
pub use self::debug_channel::DebugChannelTarget;
pub use self::file::FileTarget;
