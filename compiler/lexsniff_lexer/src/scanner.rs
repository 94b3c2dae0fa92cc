//! Hand-written scanner producing the token stream and lexical errors.
//!
//! The whole buffer is scanned in one pass. At each position the first
//! matching rule wins:
//!
//! 1. `#` directive to end of line (`#include <name>` splits in two)
//! 2. `//` and `/* */` comments
//! 3. invalid characters (recorded, then dropped)
//! 4. whitespace (`\n` also yields a [`TokenKind::Newline`] marker)
//! 5. `"` / `'` literals
//! 6. operators, two characters before one
//! 7. single-character separators
//! 8. anything else accumulates into a pending word
//!
//! Every rule except 3 flushes the pending word first. A flushed word is
//! classified as invalid identifier, keyword, number, identifier or unknown,
//! in that order.

use crate::cursor::{char_count, Cursor};
use crate::keywords::is_keyword;
use crate::{LexError, Position, Token, TokenKind};

/// Two-character operators, tried before [`OPERATORS_1`].
const OPERATORS_2: [&str; 6] = ["==", "!=", "<=", ">=", "&&", "||"];

const OPERATORS_1: [char; 7] = ['+', '-', '*', '/', '=', '<', '>'];

const SEPARATORS: [char; 10] = [';', ',', '(', ')', '{', '}', '[', ']', '.', ':'];

/// Result of scanning one buffer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Lexical errors in the order they were found.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens and lexical errors.
///
/// Pure and total: the same text always yields the same output, and
/// malformed input only ever adds entries to [`LexOutput::errors`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> LexOutput {
    let mut scanner = Scanner::new(source);
    scanner.run();
    tracing::debug!(
        tokens = scanner.tokens.len(),
        errors = scanner.errors.len(),
        "scan complete"
    );
    LexOutput {
        tokens: scanner.tokens,
        errors: scanner.errors,
    }
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    /// Word under accumulation (rule 8).
    pending: String,
    /// Position of the first character of `pending`.
    pending_start: Position,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
            pending: String::new(),
            pending_start: Position::START,
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.cursor.current() {
            match c {
                '#' => self.directive(),
                '/' if self.cursor.peek() == Some('/') => self.line_comment(),
                '/' if self.cursor.peek() == Some('*') => self.block_comment(),
                c if is_invalid(c) => self.invalid_char(c),
                c if is_whitespace(c) => self.whitespace(c),
                '"' | '\'' => self.string_literal(c),
                c => {
                    if let Some(len) = self.operator_len(c) {
                        self.operator(len);
                    } else if SEPARATORS.contains(&c) {
                        self.single(TokenKind::Separator);
                    } else {
                        self.accumulate(c);
                    }
                }
            }
        }
        self.flush();
    }

    // ─── Output ───────────────────────────────────────────────

    fn push(&mut self, lexeme: impl Into<String>, kind: TokenKind, pos: Position) {
        self.tokens.push(Token::new(lexeme, kind, pos));
    }

    fn record(&mut self, error: LexError) {
        tracing::trace!(%error, "lexical error");
        self.errors.push(error);
    }

    // ─── Pending word ─────────────────────────────────────────

    fn accumulate(&mut self, c: char) {
        if self.pending.is_empty() {
            self.pending_start = self.cursor.position();
        }
        self.pending.push(c);
        self.cursor.bump();
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.pending);
        let pos = self.pending_start;
        let kind = classify_word(&word);
        if kind == TokenKind::InvalidIdentifier {
            self.record(LexError::digit_leading_identifier(pos, word.as_str()));
        }
        self.push(word, kind, pos);
    }

    // ─── Directives & comments ────────────────────────────────

    fn directive(&mut self) {
        self.flush();
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let line = self.cursor.slice_from(start).trim_end_matches('\r');

        if let Some((open, close)) = include_header(line) {
            let header_pos = Position::new(pos.line, pos.column + char_count(&line[..open]));
            let header = &line[open..=close];
            self.push(INCLUDE, TokenKind::Preprocessor, pos);
            self.push(header, TokenKind::Header, header_pos);
        } else {
            self.push(line, TokenKind::Preprocessor, pos);
        }
    }

    fn line_comment(&mut self) {
        self.flush();
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let text = self.cursor.slice_from(start).trim_end_matches('\r');
        self.push(text, TokenKind::Comment, pos);
    }

    /// `/* … */`. An unterminated comment runs to end of input and gets a
    /// synthesized `*/`; no error is recorded for it.
    fn block_comment(&mut self) {
        self.flush();
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        self.cursor.bump();
        self.cursor.bump();
        let closed = self.cursor.eat_through("*/");
        let mut text = self.cursor.slice_from(start).to_owned();
        if !closed {
            text.push_str("*/");
        }
        self.push(text, TokenKind::Comment, pos);
    }

    // ─── Characters & whitespace ──────────────────────────────

    /// Record and drop. The pending word is left untouched.
    fn invalid_char(&mut self, c: char) {
        let pos = self.cursor.position();
        self.cursor.bump();
        self.record(LexError::invalid_character(pos, c));
    }

    fn whitespace(&mut self, c: char) {
        self.flush();
        if c == '\n' {
            let pos = self.cursor.position();
            self.push("\n", TokenKind::Newline, pos);
        }
        self.cursor.bump();
    }

    // ─── Literals ─────────────────────────────────────────────

    /// Runs to the matching `quote` or end of input. A backslash takes the
    /// next character literally; no escape sequence is interpreted.
    fn string_literal(&mut self, quote: char) {
        self.flush();
        let pos = self.cursor.position();
        self.cursor.bump();
        let mut value = String::new();
        loop {
            match self.cursor.bump() {
                None => break,
                Some(c) if c == quote => break,
                Some('\\') => value.push(self.cursor.bump().unwrap_or('\\')),
                Some(c) => value.push(c),
            }
        }
        self.push(value, TokenKind::StringLiteral, pos);
    }

    // ─── Operators & separators ───────────────────────────────

    fn operator_len(&self, c: char) -> Option<usize> {
        let rest = self.cursor.rest();
        if OPERATORS_2.iter().any(|op| rest.starts_with(op)) {
            Some(2)
        } else if OPERATORS_1.contains(&c) {
            Some(1)
        } else {
            None
        }
    }

    fn operator(&mut self, len: usize) {
        self.flush();
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        for _ in 0..len {
            self.cursor.bump();
        }
        let op = self.cursor.slice_from(start);
        self.push(op, TokenKind::Operator, pos);
    }

    fn single(&mut self, kind: TokenKind) {
        self.flush();
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        self.cursor.bump();
        let text = self.cursor.slice_from(start);
        self.push(text, kind, pos);
    }
}

const INCLUDE: &str = "#include";

/// Byte offsets of `<` and `>` in an `#include <name>` directive.
fn include_header(directive: &str) -> Option<(usize, usize)> {
    if !directive.starts_with(INCLUDE) {
        return None;
    }
    let open = directive.find('<')?;
    let close = open + directive[open..].find('>')?;
    Some((open, close))
}

/// Whitespace as understood by C's `isspace`.
#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Neither printable ASCII nor whitespace.
#[inline]
fn is_invalid(c: char) -> bool {
    !(c.is_ascii_graphic() || c == ' ' || is_whitespace(c))
}

fn classify_word(word: &str) -> TokenKind {
    let digit_first = word.as_bytes().first().is_some_and(u8::is_ascii_digit);
    if digit_first && word.bytes().any(|b| b.is_ascii_alphabetic()) {
        TokenKind::InvalidIdentifier
    } else if is_keyword(word) {
        TokenKind::Keyword
    } else if is_number(word) {
        TokenKind::NumericLiteral
    } else if is_identifier(word) {
        TokenKind::Identifier
    } else {
        TokenKind::Unknown
    }
}

/// `digits` or `digits.digits`.
fn is_number(word: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match word.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(word),
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(word: &str) -> bool {
    let mut bytes = word.bytes();
    bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests;
