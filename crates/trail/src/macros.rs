//! crates/trail/src/macros.rs
//! Formatting macros for appending entries.

/// Appends a formatted entry to a [`TaggedValue`](crate::TaggedValue) or
/// [`LogTrail`](crate::LogTrail).
///
/// The message is expanded with [`format_args!`] and then truncated to
/// [`MAX_MESSAGE_LEN`](crate::MAX_MESSAGE_LEN) bytes.
///
/// # Example
/// ```
/// use trail::{trail_log, Severity, TaggedValue};
///
/// let mut value = TaggedValue::wrap(3u64);
/// trail_log!(value, Severity::Info, "loaded {} items", 3);
/// assert_eq!(value.trail().messages().next(), Some("loaded 3 items"));
/// ```
#[macro_export]
macro_rules! trail_log {
    ($target:expr, $severity:expr, $($arg:tt)+) => {
        $target.log_fmt($severity, ::core::format_args!($($arg)+))
    };
}

/// Appends a formatted [`Severity::Ok`](crate::Severity::Ok) entry.
#[macro_export]
macro_rules! trail_ok {
    ($target:expr, $($arg:tt)+) => {
        $crate::trail_log!($target, $crate::Severity::Ok, $($arg)+)
    };
}

/// Appends a formatted [`Severity::Info`](crate::Severity::Info) entry.
///
/// # Example
/// ```
/// use trail::{trail_info, LogTrail};
///
/// let mut trail = LogTrail::new();
/// trail_info!(trail, "step {}", 1);
/// assert_eq!(trail.len(), 1);
/// ```
#[macro_export]
macro_rules! trail_info {
    ($target:expr, $($arg:tt)+) => {
        $crate::trail_log!($target, $crate::Severity::Info, $($arg)+)
    };
}

/// Appends a formatted [`Severity::Debug`](crate::Severity::Debug) entry.
///
/// # Example
/// ```
/// use trail::{trail_debug, Severity, TaggedValue};
///
/// let mut value = TaggedValue::wrap('x');
/// trail_debug!(value, "cache {}", "miss");
/// assert_eq!(value.trail().highest_severity(), Some(Severity::Debug));
/// ```
#[macro_export]
macro_rules! trail_debug {
    ($target:expr, $($arg:tt)+) => {
        $crate::trail_log!($target, $crate::Severity::Debug, $($arg)+)
    };
}

/// Appends a formatted [`Severity::Warn`](crate::Severity::Warn) entry.
#[macro_export]
macro_rules! trail_warn {
    ($target:expr, $($arg:tt)+) => {
        $crate::trail_log!($target, $crate::Severity::Warn, $($arg)+)
    };
}

/// Appends a formatted [`Severity::Error`](crate::Severity::Error) entry.
#[macro_export]
macro_rules! trail_error {
    ($target:expr, $($arg:tt)+) => {
        $crate::trail_log!($target, $crate::Severity::Error, $($arg)+)
    };
}
