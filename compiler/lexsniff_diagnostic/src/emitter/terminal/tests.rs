use lexsniff_lexer::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::B0001)
        .with_message("unmatched closing bracket ')'")
        .with_label(Position::new(3, 7), "no matching opener")
        .with_secondary_label(Position::new(1, 1), "last opener")
        .with_note("brackets inside strings are counted too")
        .with_suggestion("remove the extra `)`")
}

fn render(mode: ColorMode, f: impl FnOnce(&mut TerminalEmitter<&mut Vec<u8>>)) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn plain_layout() {
    let text = render(ColorMode::Never, |e| e.emit(&sample_diagnostic()));
    assert_eq!(
        text,
        "error[B0001]: unmatched closing bracket ')'\n\
         \x20 --> 3:7: no matching opener\n\
         \x20     1:1: last opener\n\
         \x20 = note: brackets inside strings are counted too\n\
         \x20 = help: remove the extra `)`\n\
         \n"
    );
}

#[test]
fn path_prefixes_positions() {
    let mut output = Vec::new();
    let mut emitter =
        TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false).with_path("a.py");
    emitter.emit(&Diagnostic::error(ErrorCode::I0002).with_label(Position::new(3, 1), ""));
    emitter.flush();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("  --> a.py:3:1\n"), "{text}");
}

#[test]
fn colors_only_when_asked() {
    let colored = render(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
    assert!(colored.contains("\x1b["));
    assert!(colored.contains("B0001"));

    let auto_not_tty = render(ColorMode::Auto, |e| e.emit(&sample_diagnostic()));
    assert!(!auto_not_tty.contains("\x1b["));
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn warning_header() {
    let text = render(ColorMode::Never, |e| {
        e.emit(&Diagnostic::new(ErrorCode::S0001));
    });
    assert!(text.starts_with("warning[S0001]: missing statement terminator\n"));
}

#[test]
fn summary_counts() {
    let text = render(ColorMode::Never, |e| {
        e.emit_summary(&EmitSummary {
            errors: 2,
            warnings: 1,
            suppressed: 0,
        });
    });
    assert_eq!(text, "error: 2 errors found; 1 warning emitted\n");

    let text = render(ColorMode::Never, |e| {
        e.emit_summary(&EmitSummary {
            errors: 0,
            warnings: 3,
            suppressed: 0,
        });
    });
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn summary_mentions_suppressed() {
    let text = render(ColorMode::Never, |e| {
        e.emit_summary(&EmitSummary {
            errors: 1,
            warnings: 0,
            suppressed: 4,
        });
    });
    assert_eq!(
        text,
        "error: 1 error found\nnote: 4 more errors not shown; raise --error-limit to see them\n"
    );
}

#[test]
fn empty_summary_prints_nothing() {
    let text = render(ColorMode::Never, |e| e.emit_summary(&EmitSummary::default()));
    assert_eq!(text, "");
}
