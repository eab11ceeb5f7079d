use std::fmt;
use std::str::FromStr;

/// Selects whether severity labels are wrapped in ANSI colour sequences.
///
/// The mode is a runtime flag carried by each [`TrailSink`](crate::TrailSink).
/// Its [`Default`] is fixed at build time: enabling the crate's `color`
/// feature makes [`ColorMode::Always`] the default.
///
/// # Examples
///
/// ```
/// use logging_sink::ColorMode;
///
/// assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
/// assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::build_default()));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorMode {
    /// Render plain labels.
    Never,
    /// Colour every label except `OKAY`.
    Always,
}

impl ColorMode {
    /// Returns the mode selected by the crate's `color` feature.
    #[must_use]
    pub const fn build_default() -> Self {
        if cfg!(feature = "color") {
            Self::Always
        } else {
            Self::Never
        }
    }

    /// Reports whether labels are coloured.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Always)
    }

    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Always => "always",
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::build_default()
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Always } else { Self::Never }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`ColorMode`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised colour mode {input:?} (expected always, never, or auto)")]
pub struct ParseColorModeError {
    input: String,
}

impl ParseColorModeError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "always" | "on" | "yes" | "true" => Ok(Self::Always),
            "never" | "off" | "no" | "false" => Ok(Self::Never),
            "auto" => Ok(Self::build_default()),
            _ => Err(ParseColorModeError {
                input: input.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_build_feature() {
        assert_eq!(ColorMode::default().is_enabled(), cfg!(feature = "color"));
    }

    #[test]
    fn parse_accepts_synonyms() {
        assert_eq!("ALWAYS".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("on".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("off".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[test]
    fn parse_error_names_rejected_input() {
        let err = "sometimes".parse::<ColorMode>().unwrap_err();
        assert_eq!(err.input(), "sometimes");
        assert_eq!(
            err.to_string(),
            "unrecognised colour mode \"sometimes\" (expected always, never, or auto)"
        );
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(ColorMode::from(true), ColorMode::Always);
        assert_eq!(ColorMode::from(false), ColorMode::Never);
    }
}
