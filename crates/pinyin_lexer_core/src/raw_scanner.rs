//! Raw scanner producing classified `(tag, start, len)` units.
//!
//! The scanner walks the text by extended grapheme cluster. A cluster that
//! forms a decomposed tone-marked vowel (`a` + U+030C) becomes a single
//! [`RawTag::MarkedLetter`] unit, and a decomposed untoned `ü` (`u` + U+0308)
//! a single [`RawTag::Letter`]. Every other cluster is split back into its
//! `char`s and each one is classified on its own. This keeps `\r\n` as two
//! whitespace units and makes a stray combining mark an [`RawTag::Other`].
//!
//! The scanner does not track words, resolve tones, or reject anything.
//! Those decisions belong to the tokenizer built on top of it.

use std::str::CharIndices;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::classify::{is_ascii_letter, is_digit, is_punctuation, is_whitespace};
use crate::diacritics::{decomposed_tone, decomposed_umlaut, tone_of_diacritic};
use crate::tag::{RawTag, RawToken};

/// Classify a single character.
///
/// Precedence is letter, marked letter, digit, whitespace, punctuation. The
/// classes are disjoint, so the order only documents intent.
pub fn classify_char(c: char) -> RawTag {
    if is_ascii_letter(c) {
        RawTag::Letter
    } else if let Some(tone) = tone_of_diacritic(c) {
        RawTag::MarkedLetter(tone)
    } else if is_digit(c) {
        RawTag::Digit(c)
    } else if is_whitespace(c) {
        RawTag::Whitespace(c)
    } else if is_punctuation(c) {
        RawTag::Punctuation(c)
    } else {
        RawTag::Other(c)
    }
}

/// Allocation-free iterator over the classified units of a string.
pub struct RawScanner<'a> {
    clusters: GraphemeIndices<'a>,
    /// Cluster currently being emitted one `char` at a time, with the byte
    /// offset of its first char.
    split: Option<(usize, CharIndices<'a>)>,
}

impl<'a> RawScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            clusters: text.grapheme_indices(true),
            split: None,
        }
    }

    fn next_split_char(&mut self) -> Option<RawToken> {
        let (base, chars) = self.split.as_mut()?;
        if let Some((offset, c)) = chars.next() {
            return Some(RawToken {
                tag: classify_char(c),
                start: *base + offset,
                len: c.len_utf8(),
            });
        }
        self.split = None;
        None
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        if let Some(tok) = self.next_split_char() {
            return Some(tok);
        }

        let (start, cluster) = self.clusters.next()?;
        if let Some((_, tone)) = decomposed_tone(cluster) {
            return Some(RawToken {
                tag: RawTag::MarkedLetter(tone),
                start,
                len: cluster.len(),
            });
        }
        if decomposed_umlaut(cluster).is_some() {
            return Some(RawToken {
                tag: RawTag::Letter,
                start,
                len: cluster.len(),
            });
        }

        self.split = Some((start, cluster.char_indices()));
        self.next_split_char()
    }
}

#[cfg(test)]
mod tests;
