//! The five Mandarin tone categories.

use std::fmt;

/// A resolved tone number.
///
/// Tones 1-4 can be written either as a trailing digit or as a diacritic on
/// the syllable's vowel. The neutral tone (5) has no diacritic form and is
/// only ever written as a digit or inferred for untoned syllables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tone {
    /// High level, written with a macron (`ā`).
    First = 1,
    /// Rising, written with an acute accent (`á`).
    Second = 2,
    /// Dipping, written with a caron (`ǎ`).
    Third = 3,
    /// Falling, written with a grave accent (`à`).
    Fourth = 4,
    /// Neutral (light) tone. No diacritic.
    Neutral = 5,
}

/// Size assertion: a tone is one byte.
const _: () = assert!(std::mem::size_of::<Tone>() == 1);

impl Tone {
    /// All tones in numeric order.
    pub const ALL: [Tone; 5] = [
        Tone::First,
        Tone::Second,
        Tone::Third,
        Tone::Fourth,
        Tone::Neutral,
    ];

    /// Tone for a number in `1..=5`.
    #[inline]
    pub const fn from_number(n: u8) -> Option<Tone> {
        match n {
            1 => Some(Tone::First),
            2 => Some(Tone::Second),
            3 => Some(Tone::Third),
            4 => Some(Tone::Fourth),
            5 => Some(Tone::Neutral),
            _ => None,
        }
    }

    /// Tone for an ASCII tone digit `'1'..='5'`.
    ///
    /// `'0'` and `'6'..='9'` are digits but never tone markers.
    #[inline]
    pub const fn from_digit(c: char) -> Option<Tone> {
        match c {
            '1' => Some(Tone::First),
            '2' => Some(Tone::Second),
            '3' => Some(Tone::Third),
            '4' => Some(Tone::Fourth),
            '5' => Some(Tone::Neutral),
            _ => None,
        }
    }

    /// The tone number, `1..=5`.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The tone number as an ASCII digit.
    #[inline]
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
