//! Lexical errors recorded while scanning.
//!
//! Errors never stop the scanner: each anomaly is recorded with enough
//! context (WHERE + WHAT + the offending text) to render it directly, and
//! scanning carries on with the next character.

use std::fmt;

use crate::Position;

/// A lexical anomaly found by the scanner.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the offending text starts.
    pub pos: Position,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// The offending text itself.
    pub lexeme: String,
}

/// What kind of lexical error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that is neither printable ASCII nor whitespace.
    ///
    /// The character is discarded and contributes to no token.
    InvalidCharacter { ch: char },
    /// A word that starts with a digit and contains a letter (`9lives`).
    ///
    /// Reported once per word, when the word is flushed.
    DigitLeadingIdentifier,
}

impl LexError {
    pub fn invalid_character(pos: Position, ch: char) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::InvalidCharacter { ch },
            lexeme: ch.to_string(),
        }
    }

    pub fn digit_leading_identifier(pos: Position, word: impl Into<String>) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::DigitLeadingIdentifier,
            lexeme: word.into(),
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// Human-readable description, without position or lexeme.
    pub fn message(&self) -> &'static str {
        match self.kind {
            LexErrorKind::InvalidCharacter { .. } => "invalid character",
            LexErrorKind::DigitLeadingIdentifier => {
                "invalid identifier: cannot start with a number"
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::InvalidCharacter { ch } => write!(
                f,
                "{}: {} U+{:04X}",
                self.pos,
                self.message(),
                u32::from(ch)
            ),
            LexErrorKind::DigitLeadingIdentifier => {
                write!(f, "{}: {} '{}'", self.pos, self.message(), self.lexeme)
            }
        }
    }
}
