use super::TrailSink;
use std::mem;

impl<W> TrailSink<W> {
    /// Maps the sink's writer into a different type while preserving its settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::TrailSink;
    /// use std::io::Cursor;
    /// use trail::Severity;
    ///
    /// let sink = TrailSink::new(Vec::<u8>::new()).with_threshold(Severity::Warn);
    /// let sink = sink.map_writer(Cursor::new);
    /// assert_eq!(sink.threshold(), Severity::Warn);
    /// ```
    #[must_use]
    pub fn map_writer<F, W2>(self, f: F) -> TrailSink<W2>
    where
        F: FnOnce(W) -> W2,
    {
        let TrailSink {
            writer,
            scratch,
            threshold,
            color,
            line_mode,
        } = self;
        TrailSink {
            writer: f(writer),
            scratch,
            threshold,
            color,
            line_mode,
        }
    }

    /// Replaces the underlying writer, returning the previous one.
    ///
    /// Settings are kept, so rendering can switch destinations mid-run
    /// (for example from a buffer to standard error).
    #[must_use = "the returned writer contains lines rendered before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}
