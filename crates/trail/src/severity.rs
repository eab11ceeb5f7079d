//! crates/trail/src/severity.rs
//! Severity levels attached to trail entries.

use std::fmt;
use std::str::FromStr;

/// Severity of a trail entry.
///
/// Levels compare by declaration position: `Ok < Info < Debug < Warn < Error`.
/// `Debug` therefore ranks above `Info`, unlike most logging frameworks.
/// Filtering and rendering thresholds use this ordinal order verbatim.
///
/// # Examples
///
/// ```
/// use trail::Severity;
///
/// assert!(Severity::Debug > Severity::Info);
/// assert_eq!(Severity::Warn.ordinal(), 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    /// Successful completion of a step.
    #[default]
    Ok,
    /// Informational message.
    Info,
    /// Debugging detail.
    Debug,
    /// Warning message.
    Warn,
    /// Error message.
    Error,
}

impl Severity {
    /// Every severity in declaration order.
    pub const ALL: [Self; 5] = [Self::Ok, Self::Info, Self::Debug, Self::Warn, Self::Error];

    /// Returns the declaration position used for threshold comparisons.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name of the severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use trail::Severity;
    ///
    /// assert_eq!(Severity::Ok.as_str(), "ok");
    /// assert_eq!(Severity::Warn.as_str(), "warn");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns the five-character label rendered between brackets.
    ///
    /// Shorter names are padded on the right so rendered lines align.
    ///
    /// # Examples
    ///
    /// ```
    /// use trail::Severity;
    ///
    /// assert_eq!(Severity::Ok.label(), "OKAY ");
    /// assert_eq!(Severity::Debug.label(), "DEBUG");
    /// assert!(Severity::ALL.iter().all(|s| s.label().len() == 5));
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OKAY ",
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }

    /// Returns the ANSI escape sequence that colours the label, if any.
    ///
    /// `Ok` is never coloured.
    #[must_use]
    pub const fn ansi_color(self) -> Option<&'static str> {
        match self {
            Self::Ok => None,
            Self::Info => Some("\x1b[32m"),
            Self::Debug => Some("\x1b[34m"),
            Self::Warn => Some("\x1b[33m"),
            Self::Error => Some("\x1b[31m"),
        }
    }

    /// Reports whether an entry of this severity passes `threshold`.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self.ordinal() >= threshold.ordinal()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised severity: {input:?}")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "ok" | "okay" => Ok(Self::Ok),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}
