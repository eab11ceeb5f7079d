#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/trail/src/lib.rs
//!
//! # Overview
//!
//! `trail` carries an ordered trail of severity-tagged diagnostics alongside a
//! computed value as that value flows through a chain of transformations. A
//! pipeline stage attaches messages to its result without threading a
//! separate logging channel through every signature, and a caller later
//! renders only the messages at or above a chosen [`Severity`].
//!
//! # Design
//!
//! - [`LogEntry`] is a severity plus a message bounded to
//!   [`MAX_MESSAGE_LEN`] bytes.
//! - [`LogTrail`] stores entries oldest first and offers copy and move
//!   variants of its append and prepend operations.
//! - [`TaggedValue`] bundles a [`Payload`] with its trail; the payload's
//!   [`PayloadKind`] never changes.
//! - [`TaggedValue::apply`] and friends run a transformation and merge
//!   trails so earlier entries always precede later ones.
//!
//! Rendering lives in the `logging-sink` crate.
//!
//! # Errors
//!
//! Operations that could change a value's payload kind return
//! [`TrailError::KindMismatch`]. The consuming [`TaggedValue::and_then`]
//! wraps it in [`Rejected`] together with the input value, so a failed chain
//! still has its history. Message truncation is silent.
//!
//! # Examples
//!
//! ```
//! use trail::{Severity, TaggedValue};
//!
//! let value = TaggedValue::wrap(1u64).logged(Severity::Info, "start");
//! let result = value
//!     .and_then(|p| TaggedValue::wrap(p.as_u64().unwrap_or(0) * 2).logged(Severity::Ok, "doubled"))?
//!     .and_then(|p| TaggedValue::wrap(p.as_u64().unwrap_or(0) + 1).logged(Severity::Ok, "incremented"))?;
//!
//! assert_eq!(result.payload().as_u64(), Some(3));
//! assert_eq!(
//!     result.trail().messages().collect::<Vec<_>>(),
//!     ["start", "doubled", "incremented"]
//! );
//! # Ok::<(), trail::TrailError>(())
//! ```

mod entry;
mod error;
mod macros;
mod payload;
mod severity;
mod tagged;
mod trail;
mod transform;

pub use entry::{LogEntry, MAX_MESSAGE_LEN};
pub use error::{Rejected, Result, TrailError};
pub use payload::{ParsePayloadKindError, Payload, PayloadKind};
pub use severity::{ParseSeverityError, Severity};
pub use tagged::TaggedValue;
pub use trail::{Iter, LogTrail};
pub use transform::{Declared, Transformation, declare};
