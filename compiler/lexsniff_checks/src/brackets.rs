//! Bracket nesting.

use std::fmt;

use lexsniff_lexer::{Cursor, Position};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BracketErrorKind {
    /// A closer with no opener, or whose opener is of another kind.
    Unmatched,
    /// An opener still open at end of input.
    Unclosed,
}

/// One bracket finding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BracketError {
    /// The offending closer, or the unclosed opener's original position.
    pub pos: Position,
    pub bracket: char,
    pub kind: BracketErrorKind,
}

impl BracketError {
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    pub fn column(&self) -> u32 {
        self.pos.column
    }

    pub fn message(&self) -> String {
        match self.kind {
            BracketErrorKind::Unmatched => format!("unmatched closing bracket '{}'", self.bracket),
            BracketErrorKind::Unclosed => format!("unclosed opening bracket '{}'", self.bracket),
        }
    }
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.message())
    }
}

/// The opener a closer pairs with.
fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

/// Check `( )`, `{ }` and `[ ]` nesting over the raw text.
///
/// Quotes and comments are not skipped. Unmatched closers are reported in
/// source order, followed by unclosed openers innermost first.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn check_brackets(text: &str) -> Vec<BracketError> {
    let mut errors = Vec::new();
    let mut open: Vec<(char, Position)> = Vec::new();
    let mut cursor = Cursor::new(text);

    while let Some(c) = cursor.current() {
        let pos = cursor.position();
        cursor.bump();
        if matches!(c, '(' | '{' | '[') {
            open.push((c, pos));
        } else if let Some(expected) = opener_for(c) {
            // A mismatched pair still consumes the opener.
            let matched = open.pop().is_some_and(|(top, _)| top == expected);
            if !matched {
                errors.push(BracketError {
                    pos,
                    bracket: c,
                    kind: BracketErrorKind::Unmatched,
                });
            }
        }
    }

    errors.extend(open.into_iter().rev().map(|(bracket, pos)| BracketError {
        pos,
        bracket,
        kind: BracketErrorKind::Unclosed,
    }));
    errors
}
