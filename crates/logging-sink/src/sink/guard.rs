use super::TrailSink;
use trail::Severity;

/// RAII guard that temporarily overrides a [`TrailSink`]'s threshold.
///
/// Instances are created by [`TrailSink::scoped_threshold`]. While the guard
/// is alive, writes issued through it use the scoped threshold. Dropping the
/// guard restores the previous threshold. The guard dereferences to the sink
/// so its methods can be called directly.
///
/// # Examples
///
/// ```
/// use logging_sink::{ColorMode, TrailSink};
/// use trail::{LogEntry, Severity};
///
/// let mut sink = TrailSink::new(Vec::new()).with_color(ColorMode::Never);
/// {
///     let mut quiet = sink.scoped_threshold(Severity::Error);
///     quiet.write_entry(&LogEntry::new(Severity::Warn, "hidden"))?;
/// }
/// sink.write_entry(&LogEntry::new(Severity::Warn, "shown"))?;
///
/// assert_eq!(sink.into_inner(), b"[WARN ] shown\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[must_use = "dropping the guard immediately restores the previous threshold"]
pub struct ThresholdGuard<'a, W> {
    sink: &'a mut TrailSink<W>,
    previous: Severity,
}

impl<W> ThresholdGuard<'_, W> {
    /// Returns the threshold that will be restored when the guard is dropped.
    #[must_use]
    pub const fn previous_threshold(&self) -> Severity {
        self.previous
    }
}

impl<W> TrailSink<W> {
    /// Overrides the threshold until the returned guard is dropped.
    pub fn scoped_threshold(&mut self, threshold: Severity) -> ThresholdGuard<'_, W> {
        let previous = self.threshold;
        self.threshold = threshold;
        ThresholdGuard {
            sink: self,
            previous,
        }
    }
}

impl<W> Drop for ThresholdGuard<'_, W> {
    fn drop(&mut self) {
        self.sink.set_threshold(self.previous);
    }
}

impl<W> std::ops::Deref for ThresholdGuard<'_, W> {
    type Target = TrailSink<W>;

    fn deref(&self) -> &Self::Target {
        &*self.sink
    }
}

impl<W> std::ops::DerefMut for ThresholdGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.sink
    }
}
