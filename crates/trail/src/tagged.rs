//! crates/trail/src/tagged.rs
//! A payload bundled with the trail of diagnostics produced while computing it.

use std::fmt;

use crate::error::{Result, TrailError};
use crate::{LogEntry, LogTrail, Payload, PayloadKind, Severity};

/// Payload plus the [`LogTrail`] that accompanies it through a pipeline.
///
/// The payload kind is fixed when the value is created. Operations that
/// would replace the payload with one of another kind fail with
/// [`TrailError::KindMismatch`] and leave the value untouched.
///
/// # Examples
///
/// ```
/// use trail::{PayloadKind, Severity, TaggedValue};
///
/// let mut value = TaggedValue::wrap("hello");
/// value.log(Severity::Info, "start");
///
/// assert_eq!(value.kind(), PayloadKind::Str);
/// assert_eq!(value.trail().len(), 1);
/// ```
#[derive(Clone, PartialEq)]
pub struct TaggedValue {
    pub(crate) payload: Payload,
    pub(crate) trail: LogTrail,
}

impl TaggedValue {
    /// Wraps `payload` with an empty trail.
    #[must_use]
    pub fn wrap(payload: impl Into<Payload>) -> Self {
        Self::with_trail(payload, LogTrail::new())
    }

    /// Wraps `payload` after checking that it matches `kind`.
    pub fn wrap_as(kind: PayloadKind, payload: impl Into<Payload>) -> Result<Self> {
        let payload = payload.into();
        TrailError::check_kind(kind, payload.kind())?;
        Ok(Self::wrap(payload))
    }

    /// Wraps an arbitrary value as a `Generic` payload.
    #[must_use]
    pub fn generic<T: std::any::Any + Send + Sync>(value: T) -> Self {
        Self::wrap(Payload::generic(value))
    }

    /// Wraps `payload` together with an existing trail.
    ///
    /// Transformation functions use this to hand back the entries they
    /// emitted alongside their result.
    #[must_use]
    pub fn with_trail(payload: impl Into<Payload>, trail: LogTrail) -> Self {
        Self {
            payload: payload.into(),
            trail,
        }
    }

    /// Returns the payload kind.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        self.payload.kind()
    }

    /// Borrows the payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Borrows the trail.
    #[must_use]
    pub const fn trail(&self) -> &LogTrail {
        &self.trail
    }

    /// Mutably borrows the trail.
    pub fn trail_mut(&mut self) -> &mut LogTrail {
        &mut self.trail
    }

    /// Replaces the payload, keeping the kind unchanged.
    pub fn set_payload(&mut self, payload: impl Into<Payload>) -> Result<()> {
        let payload = payload.into();
        TrailError::check_kind(self.kind(), payload.kind())?;
        self.payload = payload;
        Ok(())
    }

    /// Appends an entry to the trail.
    pub fn log(&mut self, severity: Severity, message: impl Into<String>) {
        self.trail.log(severity, message);
    }

    /// Appends an entry whose message is expanded from `args`.
    ///
    /// See also the [`trail_log!`](crate::trail_log) macro.
    pub fn log_fmt(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        self.trail.push(LogEntry::from_args(severity, args));
    }

    /// Appends an [`Severity::Ok`] entry.
    pub fn ok(&mut self, message: impl Into<String>) {
        self.log(Severity::Ok, message);
    }

    /// Appends an [`Severity::Info`] entry.
    pub fn info(&mut self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    /// Appends a [`Severity::Debug`] entry.
    pub fn debug(&mut self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    /// Appends a [`Severity::Warn`] entry.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    /// Appends a [`Severity::Error`] entry.
    pub fn error(&mut self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    /// Builder-style variant of [`log`](Self::log).
    #[must_use]
    pub fn logged(mut self, severity: Severity, message: impl Into<String>) -> Self {
        self.log(severity, message);
        self
    }

    /// Consumes the value and returns the payload and trail.
    #[must_use]
    pub fn into_parts(self) -> (Payload, LogTrail) {
        (self.payload, self.trail)
    }

    /// Consumes the value and returns only the payload.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }

    pub(crate) fn replace_payload_unchecked(&mut self, payload: Payload) {
        debug_assert_eq!(self.kind(), payload.kind());
        self.payload = payload;
    }
}

impl fmt::Debug for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedValue")
            .field("kind", &self.kind())
            .field("payload", &self.payload)
            .field("trail", &self.trail)
            .finish()
    }
}

impl From<Payload> for TaggedValue {
    fn from(payload: Payload) -> Self {
        Self::wrap(payload)
    }
}
