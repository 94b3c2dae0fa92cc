//! Token model produced by the scanner.

use std::fmt;

use crate::Position;

/// Category assigned to a lexeme.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// A word from the fixed three-grammar keyword table.
    Keyword,
    Identifier,
    NumericLiteral,
    /// A `"…"` or `'…'` literal. The lexeme is the unquoted value.
    StringLiteral,
    Operator,
    Separator,
    /// A `//` or `/* */` comment, delimiters included.
    Comment,
    /// A `#` directive, or the directive keyword of an `#include <…>`.
    Preprocessor,
    /// The `<name>` part of an `#include <name>` directive.
    Header,
    /// A word that starts with a digit but contains letters, e.g. `2fast`.
    InvalidIdentifier,
    /// Anything else the scanner accumulated, e.g. `!x` or `$`.
    Unknown,
    /// Explicit marker for a `\n` in the source.
    Newline,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::NumericLiteral,
        TokenKind::StringLiteral,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Comment,
        TokenKind::Preprocessor,
        TokenKind::Header,
        TokenKind::InvalidIdentifier,
        TokenKind::Unknown,
        TokenKind::Newline,
    ];

    /// Stable snake_case name, as shown in token listings.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::NumericLiteral => "numeric_literal",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::Comment => "comment",
            TokenKind::Preprocessor => "preprocessor",
            TokenKind::Header => "header",
            TokenKind::InvalidIdentifier => "invalid_identifier",
            TokenKind::Unknown => "unknown",
            TokenKind::Newline => "newline",
        }
    }

    /// Whether the token is a string or numeric literal.
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::StringLiteral | TokenKind::NumericLiteral)
    }

    /// Index into [`TokenKind::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexeme with its category and the position where it starts.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub pos: Position,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, pos: Position) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            pos,
        }
    }

    /// Whether this token is the given single-character separator.
    pub fn is_separator(&self, sep: char) -> bool {
        self.kind == TokenKind::Separator && self.lexeme.len() == 1 && self.lexeme.starts_with(sep)
    }
}
