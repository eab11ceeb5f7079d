use super::TrailSink;
use crate::{ColorMode, LineMode};
use trail::Severity;

impl<W> TrailSink<W> {
    /// Creates a sink that renders every entry, one per line, using the
    /// build-default [`ColorMode`].
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_parts(writer, Severity::Ok, ColorMode::default(), LineMode::WithNewline)
    }

    /// Creates a sink from explicit rendering settings.
    #[must_use]
    pub fn with_parts(writer: W, threshold: Severity, color: ColorMode, line_mode: LineMode) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
            threshold,
            color,
            line_mode,
        }
    }

    /// Builder-style threshold override.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder-style [`ColorMode`] override.
    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Builder-style [`LineMode`] override.
    #[must_use]
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Consumes the sink and returns the writer and its settings.
    #[must_use]
    pub fn into_parts(self) -> (W, Severity, ColorMode, LineMode) {
        (self.writer, self.threshold, self.color, self.line_mode)
    }
}

impl<W> Default for TrailSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
