//! crates/trail/src/error.rs
//! Error types surfaced by tagged values and logged transformations.

use crate::{PayloadKind, TaggedValue};

/// Errors returned by guarded [`TaggedValue`](crate::TaggedValue) operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TrailError {
    /// A transformation produced a payload of a different kind than declared.
    #[error("payload kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// Kind the operation required.
        expected: PayloadKind,
        /// Kind the transformation actually produced.
        found: PayloadKind,
    },
}

impl TrailError {
    pub(crate) fn check_kind(expected: PayloadKind, found: PayloadKind) -> Result<(), Self> {
        if expected == found {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "trail", %expected, %found, "rejected transformation result");

        Err(Self::KindMismatch { expected, found })
    }
}

/// Failure of a consuming operation, returning the value it was given.
///
/// [`TaggedValue::and_then`] takes its input by value. When the stage is
/// rejected the input, trail included, travels back inside this error so the
/// history that led up to the failure can still be rendered.
///
/// Converts into [`TrailError`] so `?` works in functions that only care
/// about the cause.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{error}")]
pub struct Rejected {
    error: TrailError,
    value: TaggedValue,
}

impl Rejected {
    pub(crate) const fn new(error: TrailError, value: TaggedValue) -> Self {
        Self { error, value }
    }

    /// Returns the cause of the rejection.
    #[must_use]
    pub const fn error(&self) -> TrailError {
        self.error
    }

    /// Returns the unchanged input value.
    #[must_use]
    pub const fn value(&self) -> &TaggedValue {
        &self.value
    }

    /// Recovers the unchanged input value.
    #[must_use]
    pub fn into_value(self) -> TaggedValue {
        self.value
    }

    /// Splits the rejection into its cause and the input value.
    #[must_use]
    pub fn into_parts(self) -> (TrailError, TaggedValue) {
        (self.error, self.value)
    }
}

impl From<Rejected> for TrailError {
    fn from(rejected: Rejected) -> Self {
        rejected.error
    }
}

/// Convenience alias for results produced by this crate.
pub type Result<T, E = TrailError> = std::result::Result<T, E>;
