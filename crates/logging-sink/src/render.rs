//! Line formatting shared by [`TrailSink`](crate::TrailSink) and the
//! string helpers.

use trail::{LogEntry, LogTrail, Severity};

use crate::{ColorMode, LineMode};

/// ANSI sequence that resets colouring after a label.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Appends `[<label>] <message>` to `buffer`, optionally colouring the label.
pub(crate) fn encode_entry(
    buffer: &mut Vec<u8>,
    entry: &LogEntry,
    color: ColorMode,
    line_mode: LineMode,
) {
    let severity = entry.severity();
    buffer.push(b'[');
    match severity.ansi_color() {
        Some(code) if color.is_enabled() => {
            buffer.extend_from_slice(code.as_bytes());
            buffer.extend_from_slice(severity.label().as_bytes());
            buffer.extend_from_slice(ANSI_RESET.as_bytes());
        }
        _ => buffer.extend_from_slice(severity.label().as_bytes()),
    }
    buffer.extend_from_slice(b"] ");
    buffer.extend_from_slice(entry.message().as_bytes());
    buffer.extend_from_slice(line_mode.terminator());
}

/// Renders a single entry without a trailing newline.
///
/// # Examples
///
/// ```
/// use logging_sink::{render_entry, ColorMode};
/// use trail::{LogEntry, Severity};
///
/// let entry = LogEntry::new(Severity::Warn, "low disk");
/// assert_eq!(render_entry(&entry, ColorMode::Never), "[WARN ] low disk");
/// assert_eq!(
///     render_entry(&entry, ColorMode::Always),
///     "[\x1b[33mWARN \x1b[0m] low disk"
/// );
/// ```
#[must_use]
pub fn render_entry(entry: &LogEntry, color: ColorMode) -> String {
    let mut buffer = Vec::with_capacity(entry.message().len() + 16);
    encode_entry(&mut buffer, entry, color, LineMode::WithoutNewline);
    into_string(buffer)
}

/// Renders every entry that passes `threshold`, one per line.
#[must_use]
pub fn render_trail(trail: &LogTrail, threshold: Severity, color: ColorMode) -> String {
    let mut buffer = Vec::new();
    for entry in trail.at_or_above(threshold) {
        encode_entry(&mut buffer, entry, color, LineMode::WithNewline);
    }
    into_string(buffer)
}

fn into_string(buffer: Vec<u8>) -> String {
    // Every encoded piece originates from a `str`.
    String::from_utf8(buffer)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
