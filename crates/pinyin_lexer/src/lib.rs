//! Tokenizer for Pinyin with tone numbers or tone marks.
//!
//! Splits text such as `ni3 hao3` or `nǐ hǎo` into syllable/tone pairs
//! interleaved with the punctuation and whitespace between them:
//!
//! ```text
//! "Wo3, ni3."  →  [Word("Wo", 3), Literal(','), Literal(' '), Word("ni", 3), Literal('.')]
//! ```
//!
//! Tone resolution, per syllable:
//! 1. a tone digit `1-5` directly after the letters wins;
//! 2. otherwise the first diacritic tone mark, reported as `None` (the mark
//!    stays in the text) or, with `remark`, as a number with the mark
//!    stripped;
//! 3. otherwise the neutral tone 5, unless `allow_untoned` is off.
//!
//! Syllables are not checked against the Pinyin inventory, and no word
//! segmentation happens beyond letter runs.

mod error;
mod options;
mod scanner;
mod token;

pub use error::ParseError;
pub use options::ParseOptions;
pub use pinyin_lexer_core::{strip_diacritics, Tone};
pub use token::{render, Token};

use scanner::Scanner;

/// Tokenize `text` with default options.
pub fn parse(text: &str) -> Result<Vec<Token>, ParseError> {
    parse_with(text, ParseOptions::default())
}

/// Tokenize `text`.
///
/// Leading and trailing whitespace is ignored. Empty input yields no tokens.
/// The first error aborts the scan; no partial output is returned.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn parse_with(text: &str, options: ParseOptions) -> Result<Vec<Token>, ParseError> {
    let tokens = Scanner::new(text.trim(), options).run()?;
    tracing::trace!(tokens = tokens.len(), "tokenized");
    Ok(tokens)
}
