//! Raw token tags produced by [`RawScanner`](crate::RawScanner).

use crate::Tone;

/// Classification of one scanned unit.
///
/// A unit is a single `char`, except for a decomposed vowel: `a` + U+030C is
/// one [`RawTag::MarkedLetter`] and `u` + U+0308 one [`RawTag::Letter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    /// Unmarked letter: `A-Z`, `a-z`, `ü`, `Ü`.
    Letter,
    /// Vowel carrying a tone mark, precomposed or decomposed.
    MarkedLetter(Tone),
    /// ASCII digit `0-9`.
    Digit(char),
    Whitespace(char),
    Punctuation(char),
    /// Anything else. The raw layer never fails; rejecting these is up to
    /// the caller.
    Other(char),
}

impl RawTag {
    /// Tone of a marked letter.
    #[inline]
    pub fn marked_tone(self) -> Option<Tone> {
        match self {
            RawTag::MarkedLetter(tone) => Some(tone),
            _ => None,
        }
    }
}

/// A classified unit and its byte range in the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    /// Byte offset of the unit's first byte.
    pub start: usize,
    /// Length in bytes. Always positive.
    pub len: usize,
}

impl RawToken {
    /// Byte offset one past the unit's last byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

#[cfg(test)]
mod tests;
