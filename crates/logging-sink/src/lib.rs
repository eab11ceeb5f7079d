#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` renders the [`trail::LogTrail`] carried by a
//! [`trail::TaggedValue`] into any [`std::io::Write`] implementor. Each entry
//! that passes a severity threshold becomes one line:
//!
//! ```text
//! [ERROR] message text
//! [WARN ] message text
//! [DEBUG] message text
//! [INFO ] message text
//! [OKAY ] message text
//! ```
//!
//! # Design
//!
//! The crate exposes [`TrailSink`], a lightweight wrapper around a writer
//! that stores the threshold, [`ColorMode`], and [`LineMode`]. A scratch
//! buffer is reused across writes so each rendered line reaches the writer
//! in one call. [`display`] is the one-shot form for callers that do not
//! keep a sink around.
//!
//! # Invariants
//!
//! - Rendering never modifies the trail; entries below the threshold are
//!   skipped, not removed.
//! - Thresholds compare by [`trail::Severity::ordinal`].
//! - Message text is written verbatim; only the label is ever coloured, and
//!   `OKAY` labels are never coloured.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{display, ColorMode};
//! use trail::{Severity, TaggedValue};
//!
//! let value = TaggedValue::wrap("hello")
//!     .logged(Severity::Info, "start")
//!     .logged(Severity::Warn, "slow");
//!
//! let mut out = Vec::new();
//! display(&mut out, &value, Severity::Info, ColorMode::Never)?;
//! assert_eq!(String::from_utf8(out).unwrap(), "[INFO ] start\n[WARN ] slow\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod color;
mod line_mode;
mod render;
mod sink;

use std::io::{self, Write};

use trail::{Severity, TaggedValue};

pub use color::{ColorMode, ParseColorModeError};
pub use line_mode::LineMode;
pub use render::{ANSI_RESET, render_entry, render_trail};
pub use sink::{ThresholdGuard, TrailSink};

/// Writes every entry of `value`'s trail that passes `threshold` to `sink`.
///
/// Returns the number of lines written.
pub fn display<W>(
    sink: &mut W,
    value: &TaggedValue,
    threshold: Severity,
    color: ColorMode,
) -> io::Result<usize>
where
    W: Write + ?Sized,
{
    TrailSink::with_parts(sink, threshold, color, LineMode::WithNewline).write_value(value)
}
