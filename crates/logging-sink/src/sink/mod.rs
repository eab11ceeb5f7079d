use std::fmt;

use trail::Severity;

use crate::{ColorMode, LineMode};

mod constructors;
mod guard;
mod mapping;
mod writing;

pub use guard::ThresholdGuard;

/// Streaming sink that renders trail entries into an [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with the rendering settings:
/// the severity threshold, the [`ColorMode`], and the [`LineMode`]. Entries
/// whose severity ranks below the threshold are skipped; the trail being
/// rendered is never modified. A scratch buffer is reused across writes so
/// each line reaches the writer in a single `write_all` call.
///
/// # Examples
///
/// Render a value's trail into a [`Vec<u8>`]:
///
/// ```
/// use logging_sink::TrailSink;
/// use trail::{Severity, TaggedValue};
///
/// let value = TaggedValue::wrap(1u64)
///     .logged(Severity::Debug, "parsed")
///     .logged(Severity::Error, "overflow");
///
/// let mut sink = TrailSink::new(Vec::new()).with_threshold(Severity::Warn);
/// assert_eq!(sink.write_value(&value)?, 1);
///
/// assert_eq!(sink.into_inner(), b"[ERROR] overflow\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct TrailSink<W> {
    writer: W,
    scratch: Vec<u8>,
    threshold: Severity,
    color: ColorMode,
    line_mode: LineMode,
}

impl<W> TrailSink<W> {
    /// Returns the severity threshold applied to subsequent writes.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Updates the severity threshold.
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Returns the current [`ColorMode`].
    #[must_use]
    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Updates the [`ColorMode`].
    pub fn set_color(&mut self, color: ColorMode) {
        self.color = color;
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W> fmt::Debug for TrailSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailSink")
            .field("writer", &self.writer)
            .field("threshold", &self.threshold)
            .field("color", &self.color)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
