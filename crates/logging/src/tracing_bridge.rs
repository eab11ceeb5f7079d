//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and log trails.
//!
//! [`TrailLayer`] is a tracing-subscriber layer that turns tracing events into
//! trail entries. Accepted events land in the thread-local buffer managed by
//! [`capture`](crate::capture), so code instrumented with the standard
//! `tracing` macros contributes to the trail of the value being computed.
//! [`forward_trail`] goes the other way and re-emits a finished trail as
//! tracing events.
//!
//! # Level mapping
//!
//! | tracing | severity |
//! |---------|----------|
//! | `ERROR` | `Error`  |
//! | `WARN`  | `Warn`   |
//! | `INFO`  | `Info`   |
//! | `DEBUG`, `TRACE` | `Debug` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{RenderConfig, init_tracing};
//!
//! init_tracing(&RenderConfig::from_env()?)?;
//!
//! let (_, trail) = logging::capture::capture(|| {
//!     tracing::warn!("cache miss");
//! });
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use trail::{LogTrail, Severity};

use super::capture::emit;
use super::config::RenderConfig;

/// Target used by [`forward_trail`]; [`TrailLayer`] ignores it.
pub const FORWARD_TARGET: &str = "logtrail::forward";

/// Target of the diagnostics the `trail` crate emits about itself.
const INTERNAL_TARGET: &str = "trail";

/// A tracing layer that records events as trail entries.
///
/// Events whose mapped severity ranks below the threshold are dropped. The
/// threshold uses the same ordinal comparison as trail filtering.
#[derive(Clone, Copy, Debug)]
pub struct TrailLayer {
    threshold: Severity,
}

impl TrailLayer {
    /// Creates a layer that records events at or above `threshold`.
    #[must_use]
    pub const fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Returns the threshold events must meet.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Map a tracing level to a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }

    fn is_ignored_target(target: &str) -> bool {
        target == FORWARD_TARGET
            || target == INTERNAL_TARGET
            || target.starts_with("trail::")
    }
}

impl<S> Layer<S> for TrailLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if Self::is_ignored_target(metadata.target()) {
            return;
        }

        let severity = Self::level_to_severity(metadata.level());
        if !severity.passes(self.threshold) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            emit(severity, message);
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber that records events into trails.
///
/// Only the configuration's threshold is consulted; colour and line mode
/// apply when the trail is rendered.
///
/// # Errors
///
/// Fails when a global subscriber has already been installed.
pub fn init_tracing(config: &RenderConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TrailLayer::new(config.threshold))
        .try_init()
}

/// Installs a global subscriber with an extra filter layer in front of the
/// trail layer.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{RenderConfig, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(&RenderConfig::default(), EnvFilter::from_default_env())?;
/// ```
///
/// # Errors
///
/// Fails when a global subscriber has already been installed.
pub fn init_tracing_with_filter<F>(config: &RenderConfig, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(TrailLayer::new(config.threshold))
        .try_init()
}

/// Re-emits every entry of `trail` as a tracing event under
/// [`FORWARD_TARGET`].
///
/// `Ok` entries are emitted at `INFO`.
pub fn forward_trail(trail: &LogTrail) {
    for entry in trail {
        let message = entry.message();
        match entry.severity() {
            Severity::Error => tracing::error!(target: FORWARD_TARGET, "{message}"),
            Severity::Warn => tracing::warn!(target: FORWARD_TARGET, "{message}"),
            Severity::Debug => tracing::debug!(target: FORWARD_TARGET, "{message}"),
            Severity::Info | Severity::Ok => tracing::info!(target: FORWARD_TARGET, "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_to_severity() {
        assert_eq!(TrailLayer::level_to_severity(&Level::ERROR), Severity::Error);
        assert_eq!(TrailLayer::level_to_severity(&Level::WARN), Severity::Warn);
        assert_eq!(TrailLayer::level_to_severity(&Level::INFO), Severity::Info);
        assert_eq!(TrailLayer::level_to_severity(&Level::DEBUG), Severity::Debug);
        assert_eq!(TrailLayer::level_to_severity(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn test_ignored_targets() {
        assert!(TrailLayer::is_ignored_target(FORWARD_TARGET));
        assert!(TrailLayer::is_ignored_target("trail"));
        assert!(TrailLayer::is_ignored_target("trail::trail"));
        assert!(!TrailLayer::is_ignored_target("trailhead"));
        assert!(!TrailLayer::is_ignored_target("app::parser"));
    }
}
