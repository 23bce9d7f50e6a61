//! Tokenizer output.

use std::fmt;

use pinyin_lexer_core::Tone;

/// One element of the tokenized output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A maximal run of letters.
    ///
    /// `tone` is `None` only for a syllable that carries a diacritic tone
    /// mark and was not remarked: the tone is present in `syllable` itself.
    Word {
        syllable: String,
        tone: Option<Tone>,
    },
    /// A whitespace, punctuation, stray digit, or (when allowed) any other
    /// character, verbatim.
    Literal(char),
}

impl Token {
    pub fn word(syllable: impl Into<String>, tone: Option<Tone>) -> Self {
        Token::Word {
            syllable: syllable.into(),
            tone,
        }
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word { .. })
    }

    /// Syllable text of a word.
    pub fn syllable(&self) -> Option<&str> {
        match self {
            Token::Word { syllable, .. } => Some(syllable),
            Token::Literal(_) => None,
        }
    }

    /// Resolved tone of a word. `None` for literals and for unremarked
    /// diacritic syllables.
    pub fn tone(&self) -> Option<Tone> {
        match self {
            Token::Word { tone, .. } => *tone,
            Token::Literal(_) => None,
        }
    }
}

/// Writes the token as it would appear in numbered Pinyin: the syllable
/// followed by its tone digit, or the literal character.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word {
                syllable,
                tone: Some(tone),
            } => write!(f, "{syllable}{tone}"),
            Token::Word {
                syllable,
                tone: None,
            } => f.write_str(syllable),
            Token::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// Concatenate tokens back into text.
///
/// Every word is written with its tone digit, so a syllable whose tone was
/// inferred as neutral comes back with a trailing `5`.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}
