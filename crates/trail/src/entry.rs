//! crates/trail/src/entry.rs
//! A single severity-tagged message stored in a [`LogTrail`](crate::LogTrail).

use std::fmt;

use crate::Severity;

/// Upper bound, in bytes, for the text of a [`LogEntry`].
///
/// Longer messages are truncated when the entry is created. Truncation is
/// silent and never splits a UTF-8 character.
pub const MAX_MESSAGE_LEN: usize = 256;

/// One message of a trail together with its severity.
///
/// # Examples
///
/// ```
/// use trail::{LogEntry, Severity, MAX_MESSAGE_LEN};
///
/// let entry = LogEntry::new(Severity::Warn, "disk almost full");
/// assert_eq!(entry.to_string(), "[WARN ] disk almost full");
///
/// let long = LogEntry::new(Severity::Info, "x".repeat(1000));
/// assert_eq!(long.message().len(), MAX_MESSAGE_LEN);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawEntry")
)]
pub struct LogEntry {
    severity: Severity,
    message: String,
}

impl LogEntry {
    /// Creates an entry, truncating `message` to [`MAX_MESSAGE_LEN`] bytes.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        let mut message = message.into();
        truncate_message(&mut message);
        Self { severity, message }
    }

    /// Creates an entry from pre-formatted arguments.
    #[must_use]
    pub fn from_args(severity: Severity, args: fmt::Arguments<'_>) -> Self {
        match args.as_str() {
            Some(literal) => Self::new(severity, literal),
            None => Self::new(severity, fmt::format(args)),
        }
    }

    /// Returns the entry severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the (possibly truncated) message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the entry and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (Severity, String) {
        (self.severity, self.message)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.label(), self.message)
    }
}

fn truncate_message(message: &mut String) {
    if message.len() <= MAX_MESSAGE_LEN {
        return;
    }
    let mut end = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message.truncate(end);
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEntry {
    severity: Severity,
    message: String,
}

#[cfg(feature = "serde")]
impl From<RawEntry> for LogEntry {
    fn from(raw: RawEntry) -> Self {
        Self::new(raw.severity, raw.message)
    }
}
