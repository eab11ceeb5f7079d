//! crates/trail/src/transform.rs
//! Logged transformations over [`TaggedValue`] payloads.
//!
//! # Overview
//!
//! A transformation maps the payload of a value to a new [`TaggedValue`]
//! whose trail holds the entries the transformation emitted. Applying it
//! merges trails so that the input's existing entries precede the new ones.
//! Chaining any number of stages therefore yields the concatenation, in call
//! order, of every stage's own entries.
//!
//! # Design
//!
//! The operations differ only in ownership:
//!
//! | operation | input trail | result |
//! |-----------|-------------|--------|
//! | [`TaggedValue::apply`] | copied in front | new value |
//! | [`TaggedValue::and_then`] | moved in front | new value |
//! | [`TaggedValue::apply_in_place`] | kept, new entries appended | input updated |
//! | [`TaggedValue::apply_into`] | copied onto `output` | `output` updated |
//!
//! # Errors
//!
//! Every operation checks the kind of the produced payload against the kind
//! the operation expects and fails with [`TrailError::KindMismatch`]
//! otherwise. A failed operation leaves every existing value unchanged. The
//! consuming [`TaggedValue::and_then`] hands its input back inside
//! [`Rejected`].

use crate::error::{Rejected, Result, TrailError};
use crate::{Payload, PayloadKind, TaggedValue};

/// A stage that maps a payload to a new [`TaggedValue`].
///
/// Every `FnOnce(&Payload) -> TaggedValue` closure is a transformation.
/// Implementors may declare the kind they produce; a declaration that does
/// not match the kind the operation requires is rejected before the stage
/// runs.
pub trait Transformation {
    /// Kind this stage promises to produce, if it declares one.
    fn declared_kind(&self) -> Option<PayloadKind> {
        None
    }

    /// Runs the stage on `payload`.
    fn transform(self, payload: &Payload) -> TaggedValue;
}

impl<F> Transformation for F
where
    F: FnOnce(&Payload) -> TaggedValue,
{
    fn transform(self, payload: &Payload) -> TaggedValue {
        self(payload)
    }
}

/// Transformation with an explicitly declared result kind.
///
/// Built with [`declare`].
#[derive(Clone, Debug)]
pub struct Declared<F> {
    kind: PayloadKind,
    stage: F,
}

impl<F> Transformation for Declared<F>
where
    F: FnOnce(&Payload) -> TaggedValue,
{
    fn declared_kind(&self) -> Option<PayloadKind> {
        Some(self.kind)
    }

    fn transform(self, payload: &Payload) -> TaggedValue {
        (self.stage)(payload)
    }
}

/// Pins the result kind of `stage` to `kind`.
///
/// # Examples
///
/// ```
/// use trail::{declare, PayloadKind, TaggedValue, TrailError};
///
/// let value = TaggedValue::wrap(2u64);
/// let to_text = declare(PayloadKind::Str, |p| TaggedValue::wrap(format!("{p:?}")));
///
/// assert!(matches!(
///     value.apply_stage(to_text),
///     Err(TrailError::KindMismatch { .. })
/// ));
/// ```
pub fn declare<F>(kind: PayloadKind, stage: F) -> Declared<F>
where
    F: FnOnce(&Payload) -> TaggedValue,
{
    Declared { kind, stage }
}

fn run_stage<T: Transformation>(
    payload: &Payload,
    expected: PayloadKind,
    stage: T,
) -> Result<TaggedValue> {
    if let Some(declared) = stage.declared_kind() {
        TrailError::check_kind(expected, declared)?;
    }
    let result = stage.transform(payload);
    TrailError::check_kind(expected, result.kind())?;
    Ok(result)
}

impl TaggedValue {
    /// Applies `f` to the payload and returns the resulting value.
    ///
    /// The result's trail starts with a copy of this value's trail followed by
    /// the entries `f` emitted. `self` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use trail::{Severity, TaggedValue};
    ///
    /// let value = TaggedValue::wrap("hello").logged(Severity::Info, "start");
    /// let shouted = value
    ///     .apply(|p| {
    ///         let text = p.as_str().unwrap_or_default().to_uppercase();
    ///         TaggedValue::wrap(text).logged(Severity::Ok, "done")
    ///     })
    ///     .expect("kind preserved");
    ///
    /// assert_eq!(shouted.payload().as_str(), Some("HELLO"));
    /// assert_eq!(shouted.trail().messages().collect::<Vec<_>>(), ["start", "done"]);
    /// assert_eq!(value.trail().len(), 1);
    /// ```
    pub fn apply<F>(&self, f: F) -> Result<Self>
    where
        F: FnOnce(&Payload) -> Self,
    {
        self.apply_stage(f)
    }

    /// Like [`apply`](Self::apply), for any [`Transformation`].
    pub fn apply_stage<T: Transformation>(&self, stage: T) -> Result<Self> {
        let mut result = run_stage(&self.payload, self.kind(), stage)?;
        result.trail.prepend_copy(&self.trail);
        Ok(result)
    }

    /// Applies `f` with an extra caller-supplied argument.
    pub fn apply_with<A, F>(&self, args: A, f: F) -> Result<Self>
    where
        F: FnOnce(&Payload, A) -> Self,
    {
        self.apply(move |payload: &Payload| f(payload, args))
    }

    /// Consuming form of [`apply`](Self::apply).
    ///
    /// The input trail is moved in front of the result's entries instead of
    /// being cloned, which makes long chains linear in the number of entries.
    ///
    /// # Errors
    ///
    /// On a kind mismatch the input is returned untouched inside
    /// [`Rejected`].
    pub fn and_then<F>(self, f: F) -> Result<Self, Rejected>
    where
        F: FnOnce(&Payload) -> Self,
    {
        self.and_then_stage(f)
    }

    /// Like [`and_then`](Self::and_then), for any [`Transformation`].
    pub fn and_then_stage<T: Transformation>(self, stage: T) -> Result<Self, Rejected> {
        match run_stage(&self.payload, self.kind(), stage) {
            Ok(mut result) => {
                result.trail.prepend_move(self.trail);
                Ok(result)
            }
            Err(error) => Err(Rejected::new(error, self)),
        }
    }

    /// Applies `f` and stores the result in `self`.
    ///
    /// The payload is replaced and the entries `f` emitted are appended to the
    /// existing trail. On failure `self` is unchanged.
    pub fn apply_in_place<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&Payload) -> Self,
    {
        let result = run_stage(&self.payload, self.kind(), f)?;
        let (payload, mut trail) = result.into_parts();
        self.replace_payload_unchecked(payload);
        self.trail.append_from(&mut trail);
        Ok(())
    }

    /// Applies `f` and stores the result in `output`.
    ///
    /// The expected kind is `output`'s kind, which may differ from `self`'s.
    /// On success `output`'s payload is replaced and its trail is extended
    /// with a copy of `self`'s trail followed by the entries `f` emitted.
    /// On failure `output` is unchanged.
    pub fn apply_into<F>(&self, output: &mut Self, f: F) -> Result<()>
    where
        F: FnOnce(&Payload) -> Self,
    {
        let result = run_stage(&self.payload, output.kind(), f)?;
        let (payload, trail) = result.into_parts();
        output.replace_payload_unchecked(payload);
        output.trail.append_copy(&self.trail);
        output.trail.append_move(trail);
        Ok(())
    }
}
