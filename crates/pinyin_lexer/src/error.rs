//! Tokenizer errors.
//!
//! Exactly two kinds, both fatal for the call that raised them. Callers
//! match on the variant; the message text is for humans only.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseError {
    /// A syllable ended with neither a tone digit nor a tone mark while
    /// untoned syllables were disallowed.
    #[error("Missing tone number for word \"{word}\".")]
    MissingToneNumber { word: String },

    /// A character that is not a letter, digit, whitespace, or punctuation,
    /// while arbitrary characters were disallowed.
    #[error(
        "Character \"{character}\" is not recognized. Use option \"allow_any_char\" to omit this error."
    )]
    UnrecognizedCharacter { character: char },
}
