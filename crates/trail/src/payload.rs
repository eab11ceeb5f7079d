//! crates/trail/src/payload.rs
//! Closed set of payload variants carried by a [`TaggedValue`](crate::TaggedValue).

use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Tag identifying which [`Payload`] variant a value carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PayloadKind {
    /// Unsigned 64-bit integer.
    U64,
    /// Signed integer.
    Int,
    /// Owned string.
    Str,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Single character.
    Char,
    /// Opaque value of any other type.
    Generic,
}

impl PayloadKind {
    /// Every kind in declaration order.
    pub const ALL: [Self; 7] = [
        Self::U64,
        Self::Int,
        Self::Str,
        Self::F32,
        Self::F64,
        Self::Char,
        Self::Generic,
    ];

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::U64 => "u64",
            Self::Int => "int",
            Self::Str => "str",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`PayloadKind`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised payload kind: {input:?}")]
pub struct ParsePayloadKindError {
    input: String,
}

impl FromStr for PayloadKind {
    type Err = ParsePayloadKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParsePayloadKindError {
                input: input.to_owned(),
            })
    }
}

/// The value wrapped by a [`TaggedValue`](crate::TaggedValue).
///
/// Each variant corresponds to one [`PayloadKind`]. The `Generic` variant
/// holds an opaque shared value that transformation functions recover with
/// [`Payload::downcast_ref`].
///
/// # Examples
///
/// ```
/// use trail::{Payload, PayloadKind};
///
/// let payload = Payload::from("hello");
/// assert_eq!(payload.kind(), PayloadKind::Str);
/// assert_eq!(payload.as_str(), Some("hello"));
///
/// let opaque = Payload::generic(vec![1u8, 2, 3]);
/// assert_eq!(opaque.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
/// ```
#[derive(Clone)]
pub enum Payload {
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Signed integer.
    Int(i32),
    /// Owned string.
    Str(String),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Single character.
    Char(char),
    /// Opaque shared value.
    Generic(Arc<dyn Any + Send + Sync>),
}

impl Payload {
    /// Wraps an arbitrary value as a `Generic` payload.
    #[must_use]
    pub fn generic<T: Any + Send + Sync>(value: T) -> Self {
        Self::Generic(Arc::new(value))
    }

    /// Returns the tag of this payload.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::U64(_) => PayloadKind::U64,
            Self::Int(_) => PayloadKind::Int,
            Self::Str(_) => PayloadKind::Str,
            Self::F32(_) => PayloadKind::F32,
            Self::F64(_) => PayloadKind::F64,
            Self::Char(_) => PayloadKind::Char,
            Self::Generic(_) => PayloadKind::Generic,
        }
    }

    /// Returns the value of a `U64` payload.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value of an `Int` payload.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Borrows the text of a `Str` payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of an `F32` payload.
    #[must_use]
    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            Self::F32(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value of an `F64` payload.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value of a `Char` payload.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(value) => Some(*value),
            _ => None,
        }
    }

    /// Borrows the value of a `Generic` payload as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Generic(value) => value.as_ref().downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U64(value) => f.debug_tuple("U64").field(value).finish(),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::F32(value) => f.debug_tuple("F32").field(value).finish(),
            Self::F64(value) => f.debug_tuple("F64").field(value).finish(),
            Self::Char(value) => f.debug_tuple("Char").field(value).finish(),
            Self::Generic(_) => f.write_str("Generic(..)"),
        }
    }
}

impl PartialEq for Payload {
    /// Scalar variants compare by value; `Generic` payloads compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Generic(a), Self::Generic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<u64> for Payload {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<f32> for Payload {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<char> for Payload {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_select_matching_kind() {
        assert_eq!(Payload::from(7u64).kind(), PayloadKind::U64);
        assert_eq!(Payload::from(-7i32).kind(), PayloadKind::Int);
        assert_eq!(Payload::from("s").kind(), PayloadKind::Str);
        assert_eq!(Payload::from(String::from("s")).kind(), PayloadKind::Str);
        assert_eq!(Payload::from(1.5f32).kind(), PayloadKind::F32);
        assert_eq!(Payload::from(1.5f64).kind(), PayloadKind::F64);
        assert_eq!(Payload::from('x').kind(), PayloadKind::Char);
        assert_eq!(Payload::generic(()).kind(), PayloadKind::Generic);
    }

    #[test]
    fn accessors_reject_other_variants() {
        let payload = Payload::from(3u64);
        assert_eq!(payload.as_u64(), Some(3));
        assert_eq!(payload.as_int(), None);
        assert_eq!(payload.as_str(), None);
        assert_eq!(payload.as_char(), None);
        assert!(payload.downcast_ref::<u64>().is_none());
    }

    #[test]
    fn generic_payloads_downcast_and_compare_by_identity() {
        let payload = Payload::generic(String::from("opaque"));
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("opaque")
        );
        assert!(payload.downcast_ref::<u32>().is_none());

        let clone = payload.clone();
        assert_eq!(payload, clone);
        assert_ne!(payload, Payload::generic(String::from("opaque")));
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in PayloadKind::ALL {
            assert_eq!(kind.to_string().parse::<PayloadKind>(), Ok(kind));
        }
        assert!("bytes".parse::<PayloadKind>().is_err());
    }

    #[test]
    fn debug_hides_generic_contents() {
        assert_eq!(format!("{:?}", Payload::generic(1u8)), "Generic(..)");
        assert_eq!(format!("{:?}", Payload::from('a')), "Char('a')");
    }
}
