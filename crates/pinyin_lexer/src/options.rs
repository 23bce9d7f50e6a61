//! Tokenizer leniency settings.

/// Leniency policies for one [`parse_with`](crate::parse_with) call.
///
/// A plain `Copy` value: the tokenizer reads it and never writes back.
/// Start from [`ParseOptions::default()`] and adjust with the builder
/// methods.
///
/// ```text
/// let options = ParseOptions::default().allow_untoned(false).remark(true);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Resolve syllables without any tone information to the neutral tone.
    /// When `false`, such a syllable is a `MissingToneNumber` error.
    pub allow_untoned: bool,
    /// Emit unrecognized characters as literals instead of failing.
    pub allow_any_char: bool,
    /// Collapse a diacritic tone mark into a tone number and strip the mark
    /// from the syllable text.
    pub remark: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_untoned: true,
            allow_any_char: false,
            remark: false,
        }
    }
}

impl ParseOptions {
    /// Defaults, except untoned syllables are rejected.
    pub fn strict() -> Self {
        Self::default().allow_untoned(false)
    }

    #[must_use]
    pub fn allow_untoned(mut self, allow: bool) -> Self {
        self.allow_untoned = allow;
        self
    }

    #[must_use]
    pub fn allow_any_char(mut self, allow: bool) -> Self {
        self.allow_any_char = allow;
        self
    }

    #[must_use]
    pub fn remark(mut self, remark: bool) -> Self {
        self.remark = remark;
        self
    }
}
