use super::TrailSink;
use crate::render::encode_entry;
use std::borrow::Borrow;
use std::io::{self, Write};
use trail::{LogEntry, LogTrail, TaggedValue};

impl<W> TrailSink<W>
where
    W: Write,
{
    /// Writes `entry` if its severity passes the threshold.
    ///
    /// Returns `true` when a line was written.
    pub fn write_entry(&mut self, entry: &LogEntry) -> io::Result<bool> {
        if !entry.severity().passes(self.threshold) {
            return Ok(false);
        }

        self.scratch.clear();
        encode_entry(&mut self.scratch, entry, self.color, self.line_mode);
        self.writer.write_all(&self.scratch)?;
        Ok(true)
    }

    /// Writes every entry of `trail` that passes the threshold, oldest first.
    ///
    /// Returns the number of lines written. The trail is not modified.
    pub fn write_trail(&mut self, trail: &LogTrail) -> io::Result<usize> {
        self.write_all(trail)
    }

    /// Writes the trail carried by `value`.
    pub fn write_value(&mut self, value: &TaggedValue) -> io::Result<usize> {
        self.write_trail(value.trail())
    }

    /// Writes each entry from the iterator that passes the threshold.
    ///
    /// The iterator may yield borrowed or owned [`LogEntry`] values.
    pub fn write_all<I, E>(&mut self, entries: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = E>,
        E: Borrow<LogEntry>,
    {
        let mut written = 0;
        for entry in entries {
            if self.write_entry(entry.borrow())? {
                written += 1;
            }
        }
        Ok(written)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
