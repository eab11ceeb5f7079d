/// Line termination applied after each rendered trail entry.
///
/// Trails render one entry per line by default. `WithoutNewline` is useful
/// when a single entry is spliced into a larger line, such as a status bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LineMode {
    /// Terminate each entry with `\n`.
    #[default]
    WithNewline,
    /// Write entries back to back.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether entries are newline-terminated.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::default().append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Returns the bytes written after each entry.
    #[must_use]
    pub const fn terminator(self) -> &'static [u8] {
        match self {
            Self::WithNewline => b"\n",
            Self::WithoutNewline => b"",
        }
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`].
    fn from(newline: bool) -> Self {
        if newline { Self::WithNewline } else { Self::WithoutNewline }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}
