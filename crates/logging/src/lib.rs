#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` ties log trails to the process around them. It provides:
//!
//! - [`RenderConfig`]: the threshold, colour, and line mode used when a trail
//!   is rendered, read from the environment or from `key=value` tokens;
//! - [`capture`]: a thread-local buffer that lets helpers emit entries
//!   without being handed a trail;
//! - `tracing_bridge` (feature `tracing`): a tracing-subscriber layer that
//!   records tracing events into that buffer, plus `forward_trail` to
//!   replay a trail as tracing events.
//!
//! # Environment
//!
//! | variable | effect |
//! |----------|--------|
//! | `LOGTRAIL_THRESHOLD` | minimum severity to render (`ok`, `info`, `debug`, `warn`, `error`) |
//! | `LOGTRAIL_COLOR` | `always`, `never`, or `auto` |
//! | `NO_COLOR` | non-empty disables colour unless `LOGTRAIL_COLOR=always` |
//!
//! # Examples
//!
//! ```
//! use logging::RenderConfig;
//! use trail::{Severity, TaggedValue};
//!
//! let mut config = RenderConfig::default();
//! config.apply_tokens("threshold=warn,color=never")?;
//!
//! let value = TaggedValue::wrap(7u64)
//!     .logged(Severity::Info, "loaded")
//!     .logged(Severity::Error, "checksum mismatch");
//!
//! let mut sink = config.sink(Vec::new());
//! sink.write_value(&value)?;
//! assert_eq!(sink.into_inner(), b"[ERROR] checksum mismatch\n".to_vec());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod capture;
mod config;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{COLOR_ENV, ConfigError, NO_COLOR_ENV, RenderConfig, THRESHOLD_ENV};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    FORWARD_TARGET, TrailLayer, forward_trail, init_tracing, init_tracing_with_filter,
};
