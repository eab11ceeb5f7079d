#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logtrail` carries a growing, ordered log trail alongside a value as it
//! passes through a chain of transformations. Each stage attaches
//! severity-tagged messages to its result instead of writing to a separate
//! logging channel, and the caller renders only the entries at or above a
//! chosen severity once the chain is done.
//!
//! The facade re-exports the workspace crates:
//!
//! - [`trail`]: severities, entries, trails, payloads, tagged values, and
//!   logged transformations;
//! - [`sink`]: rendering of trails to any [`std::io::Write`];
//! - [`logging`]: render configuration, thread-local capture, and the
//!   optional tracing bridge.
//!
//! # Severity ordering
//!
//! Severities rank by declaration order: `Ok < Info < Debug < Warn < Error`.
//! `Debug` therefore ranks above `Info`, and an `Info` threshold hides `Ok`
//! entries.
//!
//! # Examples
//!
//! ```
//! use logtrail::{ColorMode, Payload, Severity, TaggedValue, display};
//!
//! let greeting = TaggedValue::wrap("hello").logged(Severity::Info, "start");
//! let shouted = greeting.apply(|payload: &Payload| {
//!     let upper = payload.as_str().unwrap_or_default().to_uppercase();
//!     TaggedValue::wrap(upper).logged(Severity::Ok, "done")
//! })?;
//!
//! let mut out = Vec::new();
//! display(&mut out, &shouted, Severity::Ok, ColorMode::Never)?;
//! assert_eq!(String::from_utf8(out)?, "[INFO ] start\n[OKAY ] done\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use logging;
pub use logging_sink as sink;
pub use trail;

pub use logging::{ConfigError, RenderConfig};
pub use logging_sink::{ColorMode, LineMode, TrailSink, display, render_entry, render_trail};
pub use trail::{
    Declared, LogEntry, LogTrail, MAX_MESSAGE_LEN, ParsePayloadKindError, ParseSeverityError,
    Payload, PayloadKind, Rejected, Severity, TaggedValue, TrailError, Transformation, declare,
};
pub use trail::{trail_debug, trail_error, trail_info, trail_log, trail_ok, trail_warn};
