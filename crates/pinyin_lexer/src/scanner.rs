//! The tokenizer state machine.
//!
//! Sits on top of the raw scanner and turns classified units into tokens:
//!
//! ```text
//! text → RawScanner → RawToken → Scanner → Token
//! ```
//!
//! Dispatch per unit, in order:
//! - **Letter**: open a word if none is open; remember the first tone mark.
//! - **Digit**: a tone digit right after a letter closes the word with that
//!   tone. Any other digit is a literal.
//! - **Whitespace / punctuation / allowed other**: close the open word, then
//!   emit the character as a literal.
//! - **Other**: `UnrecognizedCharacter`.
//!
//! Every closure that is not a tone digit goes through [`Scanner::close_word`],
//! the single place where the tone policy is applied.

use pinyin_lexer_core::{strip_diacritics, RawScanner, RawTag, RawToken, Tone};

use crate::{ParseError, ParseOptions, Token};

/// Per-call scan state. Created by `parse_with` and consumed by [`run`](Self::run).
pub(crate) struct Scanner<'src> {
    source: &'src str,
    options: ParseOptions,
    /// Byte offset of the first letter of the open word.
    word_start: Option<usize>,
    /// Tone of the first marked vowel in the open word.
    pending_tone: Option<Tone>,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(source: &'src str, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            word_start: None,
            pending_tone: None,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source. Stops at the first error and drops any tokens
    /// produced so far.
    pub(crate) fn run(mut self) -> Result<Vec<Token>, ParseError> {
        for raw in RawScanner::new(self.source) {
            self.step(raw)?;
        }
        if let Some(start) = self.word_start {
            self.close_word(start, self.source.len())?;
        }
        Ok(self.tokens)
    }

    fn step(&mut self, raw: RawToken) -> Result<(), ParseError> {
        match raw.tag {
            RawTag::Letter | RawTag::MarkedLetter(_) => {
                self.letter(raw);
                Ok(())
            }
            RawTag::Digit(c) => self.digit(raw, c),
            RawTag::Whitespace(c) | RawTag::Punctuation(c) => self.delimiter(raw.start, c),
            RawTag::Other(c) if self.options.allow_any_char => self.delimiter(raw.start, c),
            RawTag::Other(c) => {
                tracing::debug!(character = ?c, offset = raw.start, "unrecognized character");
                Err(ParseError::UnrecognizedCharacter { character: c })
            }
        }
    }

    fn letter(&mut self, raw: RawToken) {
        if self.word_start.is_none() {
            self.word_start = Some(raw.start);
            self.pending_tone = None;
        }
        // First mark wins: a later marked vowel in the same word is ignored.
        if self.pending_tone.is_none() {
            self.pending_tone = raw.tag.marked_tone();
        }
    }

    fn digit(&mut self, raw: RawToken, c: char) -> Result<(), ParseError> {
        // A word is only open while letters keep coming, so an open word
        // here means the previous unit was a letter.
        if let (Some(start), Some(tone)) = (self.word_start, Tone::from_digit(c)) {
            let source = self.source;
            self.word_start = None;
            self.pending_tone = None;
            self.tokens
                .push(Token::word(&source[start..raw.start], Some(tone)));
            return Ok(());
        }
        self.delimiter(raw.start, c)
    }

    /// Close the open word (if any) at `at`, then emit `c` verbatim.
    fn delimiter(&mut self, at: usize, c: char) -> Result<(), ParseError> {
        if let Some(start) = self.word_start {
            self.close_word(start, at)?;
        }
        self.tokens.push(Token::Literal(c));
        Ok(())
    }

    /// Close the word spanning `start..end` without an explicit tone digit.
    ///
    /// - tone mark, `remark`: stripped text, the mark's tone
    /// - tone mark, no `remark`: text as written, tone `None`
    /// - no mark, `allow_untoned`: neutral tone
    /// - no mark otherwise: `MissingToneNumber`
    fn close_word(&mut self, start: usize, end: usize) -> Result<(), ParseError> {
        let text = &self.source[start..end];
        self.word_start = None;

        let token = match self.pending_tone.take() {
            Some(tone) if self.options.remark => Token::word(strip_diacritics(text), Some(tone)),
            Some(_) => Token::word(text, None),
            None if self.options.allow_untoned => Token::word(text, Some(Tone::Neutral)),
            None => {
                tracing::debug!(word = text, offset = start, "missing tone number");
                return Err(ParseError::MissingToneNumber {
                    word: text.to_owned(),
                });
            }
        };
        self.tokens.push(token);
        Ok(())
    }
}
