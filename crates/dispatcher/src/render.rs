//! Rendering of a `LogRecord` into the line handed to every target
//!
//! Layout: `<timestamp> [<LABEL>] - <message>\t<file>:<line> <function>`

use contracts::LogRecord;

/// Timestamp layout, local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a record into a single line (no trailing newline)
pub fn render(record: &LogRecord) -> String {
    let site = &record.call_site;
    format!(
        "{} [{}] - {}\t{}:{} {}",
        record.timestamp.format(TIMESTAMP_FORMAT),
        record.level.label(),
        record.message,
        site.file,
        site.line,
        site.function
    )
}
