//! crates/logging/src/config.rs
//! Render configuration assembled from defaults, environment variables, and
//! `key=value` tokens.

use std::io::Write;

use logging_sink::{ColorMode, LineMode, TrailSink};
use trail::Severity;

/// Environment variable holding the minimum severity to render.
pub const THRESHOLD_ENV: &str = "LOGTRAIL_THRESHOLD";

/// Environment variable selecting `always`, `never`, or `auto` colouring.
pub const COLOR_ENV: &str = "LOGTRAIL_COLOR";

/// Conventional variable that disables colour when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Error raised when a configuration value cannot be interpreted.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The threshold value is not a severity name.
    #[error("invalid value {value:?} for {key}: expected ok, info, debug, warn, or error")]
    InvalidThreshold {
        /// Variable or token key that carried the value.
        key: String,
        /// The rejected value.
        value: String,
    },
    /// The colour value is not `always`, `never`, or `auto`.
    #[error("invalid value {value:?} for {key}: expected always, never, or auto")]
    InvalidColor {
        /// Variable or token key that carried the value.
        key: String,
        /// The rejected value.
        value: String,
    },
    /// The newline value is not a boolean.
    #[error("invalid value {value:?} for {key}: expected true or false")]
    InvalidLineMode {
        /// Token key that carried the value.
        key: String,
        /// The rejected value.
        value: String,
    },
    /// The token names a setting that does not exist.
    #[error("unknown render setting: {key}")]
    UnknownKey {
        /// The unrecognised key.
        key: String,
    },
    /// The token has no `=` separator or an empty key.
    #[error("malformed render token {token:?}: expected key=value")]
    MalformedToken {
        /// The rejected token.
        token: String,
    },
}

/// Rendering settings applied when a trail is written out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Entries ranking below this severity are not rendered.
    pub threshold: Severity,
    /// Whether severity labels are coloured.
    pub color: ColorMode,
    /// Whether each rendered entry ends with a newline.
    pub line_mode: LineMode,
}

impl RenderConfig {
    /// Reads the configuration from the process environment.
    ///
    /// See [`from_lookup`](Self::from_lookup) for the variables consulted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from a variable lookup function.
    ///
    /// - [`THRESHOLD_ENV`] sets the threshold when present and non-empty.
    /// - [`COLOR_ENV`] selects `always`, `never`, or `auto` (the build default).
    /// - [`NO_COLOR_ENV`] with a non-empty value forces [`ColorMode::Never`]
    ///   unless [`COLOR_ENV`] explicitly asks for colour.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::RenderConfig;
    /// use logging_sink::ColorMode;
    /// use trail::Severity;
    ///
    /// let config = RenderConfig::from_lookup(|key| match key {
    ///     "LOGTRAIL_THRESHOLD" => Some("warn".to_owned()),
    ///     "NO_COLOR" => Some("1".to_owned()),
    ///     _ => None,
    /// })?;
    ///
    /// assert_eq!(config.threshold, Severity::Warn);
    /// assert_eq!(config.color, ColorMode::Never);
    /// # Ok::<(), logging::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = non_empty(THRESHOLD_ENV) {
            config.threshold = parse_threshold(THRESHOLD_ENV, &value)?;
        }

        let explicit = match non_empty(COLOR_ENV) {
            Some(value) => parse_color(COLOR_ENV, &value)?,
            None => None,
        };
        config.color = match explicit {
            Some(mode) => mode,
            None if non_empty(NO_COLOR_ENV).is_some() => ColorMode::Never,
            None => ColorMode::build_default(),
        };

        Ok(config)
    }

    /// Applies a single `key=value` token such as `threshold=warn`,
    /// `color=always`, or `newline=false`.
    pub fn apply_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let (key, value) = split_token(token)?;

        match key.to_ascii_lowercase().as_str() {
            "threshold" | "level" => self.threshold = parse_threshold(key, value)?,
            "color" | "colour" => {
                self.color = parse_color(key, value)?.unwrap_or_else(ColorMode::build_default);
            }
            "newline" => self.line_mode = LineMode::from(parse_bool(key, value)?),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Applies a comma-separated list of tokens in order.
    ///
    /// Empty items are ignored. Stops at the first invalid token; settings
    /// applied before it remain in effect.
    pub fn apply_tokens(&mut self, tokens: &str) -> Result<(), ConfigError> {
        tokens
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_token(token))
    }

    /// Creates a [`TrailSink`] carrying these settings.
    #[must_use]
    pub fn sink<W: Write>(&self, writer: W) -> TrailSink<W> {
        TrailSink::with_parts(writer, self.threshold, self.color, self.line_mode)
    }
}

/// Splits `key=value`, trimming both halves.
fn split_token(token: &str) -> Result<(&str, &str), ConfigError> {
    match token.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ConfigError::MalformedToken {
            token: token.to_owned(),
        }),
    }
}

fn parse_threshold(key: &str, value: &str) -> Result<Severity, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidThreshold {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

/// Returns `None` for `auto`.
fn parse_color(key: &str, value: &str) -> Result<Option<ColorMode>, ConfigError> {
    if value.trim().eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidColor {
            key: key.to_owned(),
            value: value.to_owned(),
        })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidLineMode {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}
