//! Character classification predicates.
//!
//! All predicates are pure functions of a single `char`. The scanner combines
//! them in a fixed precedence order: letter, digit, whitespace, punctuation.

pub use crate::diacritics::is_diacritic_letter;
use crate::Tone;

/// Punctuation that delimits syllables, half-width and full-width.
const PUNCTUATION: &[char] = &[
    '.', '\u{3002}', // 。 ideographic full stop
    ',', '\u{FF0C}', // ， fullwidth comma
    ':', ';', '?', '!', '-', '\u{2013}', // – en dash
    '\'',
];

/// ASCII letters plus `ü`/`Ü`, the one non-ASCII letter of unmarked Pinyin.
#[inline]
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\u{00FC}' || c == '\u{00DC}'
}

/// Any character that may appear inside a syllable.
#[inline]
pub fn is_letter(c: char) -> bool {
    is_ascii_letter(c) || is_diacritic_letter(c)
}

/// ASCII `0-9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII `1-5`, the digits that can close a syllable as its tone.
#[inline]
pub fn is_tone_digit(c: char) -> bool {
    Tone::from_digit(c).is_some()
}

/// Space, tab, line feed, carriage return, vertical tab.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{000B}')
}

/// Half-width or full-width syllable delimiter: `. 。 , ， : ; ? ! - – '`.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}
