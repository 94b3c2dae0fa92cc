use pretty_assertions::assert_eq;

use super::*;
use crate::LexErrorKind;

/// Helper: scan and return `(lexeme, kind)` pairs.
fn pairs(source: &str) -> Vec<(String, TokenKind)> {
    tokenize(source)
        .tokens
        .into_iter()
        .map(|t| (t.lexeme, t.kind))
        .collect()
}

fn p(lexeme: &str, kind: TokenKind) -> (String, TokenKind) {
    (lexeme.to_owned(), kind)
}

// ─── Basic classification ─────────────────────────────────────

#[test]
fn empty_source_has_no_tokens() {
    let out = tokenize("");
    assert!(out.tokens.is_empty());
    assert!(out.errors.is_empty());
}

#[test]
fn simple_statement() {
    use TokenKind::*;
    assert_eq!(
        pairs("int x = 42;"),
        vec![
            p("int", Identifier),
            p("x", Identifier),
            p("=", Operator),
            p("42", NumericLiteral),
            p(";", Separator),
        ]
    );
}

#[test]
fn keywords_from_the_shared_table() {
    use TokenKind::*;
    assert_eq!(
        pairs("def area(self):"),
        vec![
            p("def", Keyword),
            p("area", Identifier),
            p("(", Separator),
            p("self", Identifier),
            p(")", Separator),
            p(":", Separator),
        ]
    );
}

#[test]
fn dot_splits_qualified_names() {
    use TokenKind::*;
    assert_eq!(
        pairs("System.out.println"),
        vec![
            p("System", Keyword),
            p(".", Separator),
            p("out", Keyword),
            p(".", Separator),
            p("println", Keyword),
        ]
    );
}

#[test]
fn decimal_point_is_a_separator() {
    use TokenKind::*;
    assert_eq!(
        pairs("3.14"),
        vec![p("3", NumericLiteral), p(".", Separator), p("14", NumericLiteral)]
    );
}

#[test]
fn leading_zeros_are_still_numbers() {
    assert_eq!(pairs("007"), vec![p("007", TokenKind::NumericLiteral)]);
}

#[test]
fn unrecognised_words_are_unknown() {
    use TokenKind::*;
    assert_eq!(pairs("$x"), vec![p("$x", Unknown)]);
    assert_eq!(pairs("!done"), vec![p("!done", Unknown)]);
    assert_eq!(pairs("a&b"), vec![p("a&b", Unknown)]);
}

// ─── Operators ────────────────────────────────────────────────

#[test]
fn two_char_operators_win() {
    use TokenKind::*;
    assert_eq!(
        pairs("a<=b"),
        vec![p("a", Identifier), p("<=", Operator), p("b", Identifier)]
    );
    assert_eq!(
        pairs("x!=y&&z"),
        vec![
            p("x", Identifier),
            p("!=", Operator),
            p("y", Identifier),
            p("&&", Operator),
            p("z", Identifier),
        ]
    );
}

#[test]
fn shift_is_two_single_operators() {
    use TokenKind::*;
    assert_eq!(
        pairs("cout << x"),
        vec![
            p("cout", Keyword),
            p("<", Operator),
            p("<", Operator),
            p("x", Identifier),
        ]
    );
}

#[test]
fn separators_end_pending_words() {
    use TokenKind::*;
    assert_eq!(
        pairs("f(a,b);"),
        vec![
            p("f", Identifier),
            p("(", Separator),
            p("a", Identifier),
            p(",", Separator),
            p("b", Identifier),
            p(")", Separator),
            p(";", Separator),
        ]
    );
}

// ─── Whitespace & positions ───────────────────────────────────

#[test]
fn newlines_become_marker_tokens() {
    use TokenKind::*;
    assert_eq!(
        pairs("a\nb\r\nc"),
        vec![
            p("a", Identifier),
            p("\n", Newline),
            p("b", Identifier),
            p("\n", Newline),
            p("c", Identifier),
        ]
    );
}

#[test]
fn tokens_carry_start_positions() {
    let out = tokenize("if x:\n    y = 1");
    let positions: Vec<_> = out.tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 4),
            Position::new(1, 5),
            Position::new(1, 6),
            Position::new(2, 5),
            Position::new(2, 7),
            Position::new(2, 9),
        ]
    );
}

// ─── Directives ───────────────────────────────────────────────

#[test]
fn include_splits_into_directive_and_header() {
    let out = tokenize("#include <iostream>\n");
    assert_eq!(
        out.tokens,
        vec![
            Token::new("#include", TokenKind::Preprocessor, Position::new(1, 1)),
            Token::new("<iostream>", TokenKind::Header, Position::new(1, 10)),
            Token::new("\n", TokenKind::Newline, Position::new(1, 20)),
        ]
    );
}

#[test]
fn quoted_include_stays_whole() {
    assert_eq!(
        pairs("#include \"util.h\""),
        vec![p("#include \"util.h\"", TokenKind::Preprocessor)]
    );
}

#[test]
fn other_directives_are_one_token() {
    use TokenKind::*;
    assert_eq!(
        pairs("#define MAX 10\nx"),
        vec![
            p("#define MAX 10", Preprocessor),
            p("\n", Newline),
            p("x", Identifier),
        ]
    );
}

#[test]
fn hash_mid_line_runs_to_end_of_line() {
    use TokenKind::*;
    assert_eq!(
        pairs("x = 1  # note\r\n"),
        vec![
            p("x", Identifier),
            p("=", Operator),
            p("1", NumericLiteral),
            p("# note", Preprocessor),
            p("\n", Newline),
        ]
    );
}

// ─── Comments ─────────────────────────────────────────────────

#[test]
fn line_comment_runs_to_newline() {
    use TokenKind::*;
    assert_eq!(
        pairs("x // trailing\ny"),
        vec![
            p("x", Identifier),
            p("// trailing", Comment),
            p("\n", Newline),
            p("y", Identifier),
        ]
    );
}

#[test]
fn block_comment_spans_lines() {
    let out = tokenize("a /* one\ntwo */ b");
    assert_eq!(out.tokens[1].lexeme, "/* one\ntwo */");
    assert_eq!(out.tokens[1].kind, TokenKind::Comment);
    assert_eq!(out.tokens[2].pos, Position::new(2, 8));
}

#[test]
fn unterminated_block_comment_is_closed_silently() {
    let out = tokenize("x /* open");
    assert_eq!(
        out.tokens.last().map(|t| t.lexeme.as_str()),
        Some("/* open*/")
    );
    assert!(out.errors.is_empty());
}

#[test]
fn slash_alone_is_an_operator() {
    use TokenKind::*;
    assert_eq!(
        pairs("a/b"),
        vec![p("a", Identifier), p("/", Operator), p("b", Identifier)]
    );
}

// ─── Literals ─────────────────────────────────────────────────

#[test]
fn string_lexeme_is_unquoted_value() {
    assert_eq!(
        pairs("\"hello world\""),
        vec![p("hello world", TokenKind::StringLiteral)]
    );
}

#[test]
fn backslash_takes_next_char_literally() {
    assert_eq!(
        pairs(r#""say \"hi\"""#),
        vec![p("say \"hi\"", TokenKind::StringLiteral)]
    );
    assert_eq!(pairs(r"'\n'"), vec![p("n", TokenKind::StringLiteral)]);
}

#[test]
fn scanning_resumes_after_closing_quote() {
    use TokenKind::*;
    assert_eq!(
        pairs(r#"print("a\"b", c)"#),
        vec![
            p("print", Identifier),
            p("(", Separator),
            p("a\"b", StringLiteral),
            p(",", Separator),
            p("c", Identifier),
            p(")", Separator),
        ]
    );
}

#[test]
fn unterminated_string_runs_to_eof() {
    let out = tokenize("x = \"abc");
    assert_eq!(
        out.tokens.last().map(|t| (t.lexeme.as_str(), t.kind)),
        Some(("abc", TokenKind::StringLiteral))
    );
    assert!(out.errors.is_empty());
}

#[test]
fn non_ascii_inside_strings_is_fine() {
    let out = tokenize("s = \"café\"");
    assert!(out.errors.is_empty());
    assert_eq!(out.tokens[2].lexeme, "café");
}

// ─── Errors ───────────────────────────────────────────────────

#[test]
fn digit_leading_word_reports_once() {
    let out = tokenize("9lives = 1");
    assert_eq!(out.tokens[0].kind, TokenKind::InvalidIdentifier);
    assert_eq!(
        out.errors,
        vec![LexError::digit_leading_identifier(
            Position::new(1, 1),
            "9lives"
        )]
    );
}

#[test]
fn invalid_char_is_dropped_from_word() {
    let out = tokenize("ab\u{1}cd");
    assert_eq!(out.tokens, vec![Token::new("abcd", TokenKind::Identifier, Position::START)]);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidCharacter { ch: '\u{1}' });
    assert_eq!(out.errors[0].pos, Position::new(1, 3));
}

#[test]
fn non_ascii_outside_strings_is_invalid() {
    let out = tokenize("café");
    assert_eq!(pairs("café"), vec![p("caf", TokenKind::Identifier)]);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].message(), "invalid character");
    assert_eq!(out.errors[0].column(), 4);
}

#[test]
fn errors_never_stop_scanning() {
    let out = tokenize("1a \u{7f} 2b;");
    assert_eq!(out.errors.len(), 3);
    assert_eq!(
        out.tokens.last().map(|t| t.lexeme.as_str()),
        Some(";")
    );
}

// ─── Properties ───────────────────────────────────────────────

#[test]
fn repeated_scans_are_identical() {
    let source = "#include <vector>\nint main() {\n  cout << \"x\"; // c\n}\n";
    assert_eq!(tokenize(source), tokenize(source));
}

mod proptest_tokenize {
    use super::super::{is_whitespace, tokenize};
    use crate::TokenKind;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics_and_is_deterministic(source in any::<String>()) {
            let first = tokenize(&source);
            let second = tokenize(&source);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn lexemes_rebuild_the_non_whitespace_text(
            source in "[a-z0-9_ ;,(){}\\[\\].:+*=<>!&|$\\n\\t-]{0,64}"
        ) {
            let out = tokenize(&source);
            let rebuilt: String = out
                .tokens
                .iter()
                .filter(|t| t.kind != TokenKind::Newline)
                .map(|t| t.lexeme.as_str())
                .collect();
            let expected: String = source.chars().filter(|&c| !is_whitespace(c)).collect();
            prop_assert_eq!(rebuilt, expected);
        }

        #[test]
        fn one_newline_token_per_newline(source in "[a-z \\n;{}]{0,64}") {
            let out = tokenize(&source);
            let markers = out.tokens.iter().filter(|t| t.kind == TokenKind::Newline).count();
            prop_assert_eq!(markers, source.matches('\n').count());
        }
    }
}
