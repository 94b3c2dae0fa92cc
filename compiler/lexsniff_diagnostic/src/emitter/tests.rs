use lexsniff_lexer::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

/// Records the codes it is asked to emit.
#[derive(Default)]
struct Recorder {
    codes: Vec<ErrorCode>,
}

impl DiagnosticEmitter for Recorder {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.codes.push(diagnostic.code);
    }

    fn flush(&mut self) {}

    fn emit_summary(&mut self, _summary: &EmitSummary) {}
}

fn sample() -> Vec<Diagnostic> {
    vec![
        Diagnostic::error(ErrorCode::L0001).with_label(Position::new(1, 1), "here"),
        Diagnostic::warning(ErrorCode::S0001),
        Diagnostic::error(ErrorCode::Q0001),
        Diagnostic::error(ErrorCode::B0001),
        Diagnostic::warning(ErrorCode::S0001),
    ]
}

#[test]
fn escape_json_special_characters() {
    assert_eq!(escape_json("hello"), "hello");
    assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
    assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
    assert_eq!(escape_json("path\\file"), "path\\\\file");
    assert_eq!(escape_json("tab\there"), "tab\\there");
    assert_eq!(escape_json("bell\u{7}"), "bell\\u0007");
}

#[test]
fn trailing_comma_on_all_but_last() {
    assert_eq!(trailing_comma(0, 2), ",");
    assert_eq!(trailing_comma(1, 2), "");
}

#[test]
fn unlimited_emits_everything() {
    let mut rec = Recorder::default();
    let summary = rec.emit_limited(&sample(), 0);
    assert_eq!(
        summary,
        EmitSummary {
            errors: 3,
            warnings: 2,
            suppressed: 0,
        }
    );
    assert_eq!(rec.codes.len(), 5);
}

#[test]
fn limit_drops_later_errors_only() {
    let mut rec = Recorder::default();
    let summary = rec.emit_limited(&sample(), 1);
    assert_eq!(
        summary,
        EmitSummary {
            errors: 1,
            warnings: 2,
            suppressed: 2,
        }
    );
    assert_eq!(
        rec.codes,
        vec![ErrorCode::L0001, ErrorCode::S0001, ErrorCode::S0001]
    );
}
