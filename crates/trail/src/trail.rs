//! crates/trail/src/trail.rs
//! Ordered, owned sequence of [`LogEntry`] values.
//!
//! # Overview
//!
//! A [`LogTrail`] records diagnostics in the order they were produced, oldest
//! first. Trails are merged when logged transformations compose, and the
//! merge primitives come in two flavours that later stages rely on:
//!
//! - **copy** operations take the source by reference and clone its entries,
//!   so the source stays owned by its original holder;
//! - **move** operations take the source by value (or by `&mut`, leaving it
//!   empty) and splice the existing entries without cloning.
//!
//! # Invariants
//!
//! - Entries are stored in chronological order and every merge preserves the
//!   internal order of both operands.
//! - An entry belongs to exactly one trail; copies are independent values.
//! - [`LogTrail::filter`] and [`LogTrail::clear`] drop removed entries
//!   immediately; there is no way to recover them.

use std::iter::FusedIterator;
use std::{fmt, slice, vec};

use crate::{LogEntry, Severity};

/// Chronological list of severity-tagged messages.
///
/// # Examples
///
/// ```
/// use trail::{LogTrail, Severity};
///
/// let mut trail = LogTrail::new();
/// trail.log(Severity::Info, "start");
/// trail.log(Severity::Error, "failed");
///
/// let mut earlier = LogTrail::new();
/// earlier.log(Severity::Debug, "loaded config");
/// trail.prepend_copy(&earlier);
///
/// assert_eq!(
///     trail.messages().collect::<Vec<_>>(),
///     ["loaded config", "start", "failed"]
/// );
/// assert_eq!(earlier.len(), 1);
/// ```
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LogTrail {
    entries: Vec<LogEntry>,
}

impl LogTrail {
    /// Creates an empty trail.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the trail holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry at the end of the trail.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Appends a new entry built from `severity` and `message`.
    pub fn log(&mut self, severity: Severity, message: impl Into<String>) {
        self.push(LogEntry::new(severity, message));
    }

    /// Appends a new entry whose message is expanded from `args`.
    pub fn log_fmt(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        self.push(LogEntry::from_args(severity, args));
    }

    /// Clones every entry of `source` onto the end of this trail.
    pub fn append_copy(&mut self, source: &Self) {
        self.entries.extend_from_slice(&source.entries);
    }

    /// Moves the entries of `source` onto the end of this trail.
    pub fn append_move(&mut self, mut source: Self) {
        self.append_from(&mut source);
    }

    /// Moves the entries of `source` onto the end of this trail, leaving
    /// `source` empty.
    pub fn append_from(&mut self, source: &mut Self) {
        if self.entries.is_empty() {
            std::mem::swap(&mut self.entries, &mut source.entries);
        } else {
            self.entries.append(&mut source.entries);
        }
    }

    /// Clones every entry of `source` in front of the existing entries.
    pub fn prepend_copy(&mut self, source: &Self) {
        self.entries.splice(0..0, source.entries.iter().cloned());
    }

    /// Moves the entries of `source` in front of the existing entries.
    pub fn prepend_move(&mut self, mut source: Self) {
        self.prepend_from(&mut source);
    }

    /// Moves the entries of `source` in front of the existing entries,
    /// leaving `source` empty.
    pub fn prepend_from(&mut self, source: &mut Self) {
        source.entries.append(&mut self.entries);
        std::mem::swap(&mut self.entries, &mut source.entries);
    }

    /// Removes every entry whose severity ranks below `threshold`.
    ///
    /// Remaining entries keep their relative order. Returns the number of
    /// entries removed.
    pub fn filter(&mut self, threshold: Severity) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.severity().passes(threshold));
        let removed = before - self.entries.len();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "trail",
            %threshold,
            removed,
            remaining = self.entries.len(),
            "filtered trail"
        );

        removed
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "trail", removed = self.entries.len(), "cleared trail");

        self.entries.clear();
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the entries that pass `threshold` without removing the rest.
    pub fn at_or_above(&self, threshold: Severity) -> impl Iterator<Item = &LogEntry> + '_ {
        self.iter()
            .filter(move |entry| entry.severity().passes(threshold))
    }

    /// Counts the entries that pass `threshold`.
    #[must_use]
    pub fn count_at_or_above(&self, threshold: Severity) -> usize {
        self.at_or_above(threshold).count()
    }

    /// Iterates over the message texts, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(LogEntry::message)
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Returns the highest severity recorded so far.
    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.iter().map(LogEntry::severity).max()
    }

    /// Borrows the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[LogEntry] {
        &self.entries
    }
}

impl fmt::Debug for LogTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl FromIterator<LogEntry> for LogTrail {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<LogEntry> for LogTrail {
    fn extend<I: IntoIterator<Item = LogEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl From<Vec<LogEntry>> for LogTrail {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for LogTrail {
    type Item = LogEntry;
    type IntoIter = vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogTrail {
    type Item = &'a LogEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the entries of a [`LogTrail`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, LogEntry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests;
