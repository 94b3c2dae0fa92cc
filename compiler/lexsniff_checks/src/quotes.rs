//! Quote balance.

use std::fmt;

use lexsniff_lexer::{Cursor, Position};

/// A quote region still open at end of input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct QuoteError {
    /// Where the unterminated region began.
    pub pos: Position,
}

impl QuoteError {
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    pub fn column(&self) -> u32 {
        self.pos.column
    }

    pub fn message(&self) -> &'static str {
        "unterminated quote"
    }
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.message())
    }
}

/// Check that quote characters pair up.
///
/// A single in/out toggle flips on every `"` or `'`; the two kinds are not
/// told apart and backslashes escape nothing. At most one error results.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn check_quotes(text: &str) -> Vec<QuoteError> {
    let mut opened_at: Option<Position> = None;
    let mut cursor = Cursor::new(text);

    while let Some(c) = cursor.current() {
        if matches!(c, '"' | '\'') {
            opened_at = match opened_at {
                Some(_) => None,
                None => Some(cursor.position()),
            };
        }
        cursor.bump();
    }

    opened_at.map(|pos| QuoteError { pos }).into_iter().collect()
}
