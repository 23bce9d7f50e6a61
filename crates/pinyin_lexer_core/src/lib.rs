//! Low-level scanning for tone-marked and tone-numbered Pinyin.
//!
//! This crate knows which characters are letters, which are tone digits,
//! which vowels carry which tone mark, and how to walk a string unit by unit.
//! It has no opinion on what a word is or what to do with an untoned one;
//! that policy lives in `pinyin_lexer`.
//!
//! ```text
//! text → RawScanner → RawToken { tag, start, len } → tokenizer
//! ```
//!
//! Nothing here allocates except [`strip_diacritics`], and nothing fails.

pub mod classify;
pub mod diacritics;
mod raw_scanner;
mod tag;
mod tone;

pub use diacritics::{strip_diacritic, strip_diacritics, tone_of_diacritic};
pub use raw_scanner::{classify_char, RawScanner};
pub use tag::{RawTag, RawToken};
pub use tone::Tone;
