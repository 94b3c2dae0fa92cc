//! Rendering analysis results for the command line.
//!
//! Every function writes to a caller-supplied writer so the binary can
//! target stdout while tests capture into a buffer. Diagnostics go through
//! the emitters of `lexsniff_diagnostic`; the surrounding listings are
//! written here.

use std::io::{self, Write};

use lexsniff_detect::Classification;
use lexsniff_diagnostic::emitter::{
    escape_json, DiagnosticEmitter, EmitSummary, JsonEmitter, TerminalEmitter,
};
use lexsniff_diagnostic::Diagnostic;
use lexsniff_lexer::{LexOutput, Token, TokenKind, TokenStats};

use crate::problem::ToDiagnostic;
use crate::{Analysis, OutputFormat, ReportConfig};

/// Write the full `check` report for `path`.
pub fn write_check<W: Write>(
    out: &mut W,
    path: &str,
    analysis: &Analysis,
    config: &ReportConfig,
    is_tty: bool,
) -> io::Result<EmitSummary> {
    let diagnostics = analysis.diagnostics();
    let origin = if analysis.was_detected() {
        "detected"
    } else {
        "forced"
    };

    match config.format {
        OutputFormat::Json => {
            let mut sink = CheckedWriter::new(out);
            let summary = {
                let mut emitter = JsonEmitter::new(&mut sink)
                    .with_path(path)
                    .with_field("language", analysis.language.label())
                    .with_field("language_source", origin);
                emit_json(&mut emitter, &diagnostics, config.error_limit)
            };
            sink.finish()?;
            Ok(summary)
        }
        OutputFormat::Terminal => {
            write!(out, "{path}: {} ({origin}", analysis.language)?;
            if let Some(detection) = &analysis.detection {
                write!(out, "; {}", detection.scores)?;
            }
            writeln!(out, ")")?;
            if config.show_tokens {
                writeln!(out)?;
                write_token_table(out, &analysis.tokens)?;
            }
            if config.show_stats {
                writeln!(out)?;
                write_stats(out, &analysis.stats())?;
            }
            writeln!(out)?;

            let summary = emit_terminal(out, path, &diagnostics, config, is_tty)?;
            if diagnostics.is_empty() {
                writeln!(out, "no problems found")?;
            }
            out.flush()?;
            Ok(summary)
        }
    }
}

/// Write the `lex` listing: tokens, statistics, then lexical errors.
pub fn write_lex<W: Write>(
    out: &mut W,
    path: &str,
    lexed: &LexOutput,
    config: &ReportConfig,
    is_tty: bool,
) -> io::Result<EmitSummary> {
    let diagnostics: Vec<Diagnostic> = lexed.errors.iter().map(ToDiagnostic::to_diagnostic).collect();
    let stats = TokenStats::from_tokens(&lexed.tokens);

    match config.format {
        OutputFormat::Json => {
            let mut sink = CheckedWriter::new(out);
            let summary = {
                let mut emitter = JsonEmitter::new(&mut sink)
                    .with_path(path)
                    .with_raw_field("tokens", tokens_json(&lexed.tokens))
                    .with_raw_field("stats", stats_json(&stats));
                emit_json(&mut emitter, &diagnostics, config.error_limit)
            };
            sink.finish()?;
            Ok(summary)
        }
        OutputFormat::Terminal => {
            write_token_table(out, &lexed.tokens)?;
            writeln!(out)?;
            write_stats(out, &stats)?;
            if lexed.has_errors() {
                writeln!(out)?;
            }
            let summary = emit_terminal(out, path, &diagnostics, config, is_tty)?;
            out.flush()?;
            Ok(summary)
        }
    }
}

/// Write the detected language and the score table.
pub fn write_detection<W: Write>(
    out: &mut W,
    path: &str,
    detection: &Classification,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{{")?;
            writeln!(out, "  \"file\": \"{}\",", escape_json(path))?;
            writeln!(out, "  \"language\": \"{}\",", detection.language)?;
            let scores: Vec<String> = detection
                .scores
                .iter()
                .map(|(lang, points)| format!("\"{lang}\": {points}"))
                .collect();
            writeln!(out, "  \"scores\": {{ {} }}", scores.join(", "))?;
            writeln!(out, "}}")?;
        }
        OutputFormat::Terminal => {
            writeln!(out, "{path}: {}", detection.language)?;
            for (lang, points) in detection.scores.iter() {
                writeln!(out, "  {:<8} {points}", lang.label())?;
            }
        }
    }
    out.flush()
}

fn emit_terminal<W: Write>(
    out: &mut W,
    path: &str,
    diagnostics: &[Diagnostic],
    config: &ReportConfig,
    is_tty: bool,
) -> io::Result<EmitSummary> {
    let mut sink = CheckedWriter::new(out);
    let summary = {
        let mut emitter =
            TerminalEmitter::with_color_mode(&mut sink, config.color, is_tty).with_path(path);
        let summary = emitter.emit_limited(diagnostics, config.error_limit);
        emitter.emit_summary(&summary);
        emitter.flush();
        summary
    };
    sink.finish()?;
    Ok(summary)
}

fn emit_json<W: Write>(
    emitter: &mut JsonEmitter<W>,
    diagnostics: &[Diagnostic],
    error_limit: usize,
) -> EmitSummary {
    emitter.begin();
    let summary = emitter.emit_limited(diagnostics, error_limit);
    emitter.emit_summary(&summary);
    emitter.end();
    emitter.flush();
    summary
}

/// Forwards to `inner` and keeps the first hard write failure.
///
/// The emitters discard write results; [`finish`](Self::finish) hands the
/// kept failure back to the report.
struct CheckedWriter<'a, W: Write> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> CheckedWriter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        CheckedWriter { inner, error: None }
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn track<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        match result {
            Err(err) if err.kind() != io::ErrorKind::Interrupted => {
                let kind = err.kind();
                if self.error.is_none() {
                    self.error = Some(err);
                }
                Err(kind.into())
            }
            other => other,
        }
    }
}

impl<W: Write> Write for CheckedWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        self.track(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.flush();
        self.track(result)
    }
}

// ─── Listings ─────────────────────────────────────────────────

fn write_token_table<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    writeln!(out, "{:<9} {:<18} LEXEME", "POS", "KIND")?;
    for token in tokens {
        writeln!(
            out,
            "{:<9} {:<18} {}",
            token.pos.to_string(),
            token.kind.name(),
            token.lexeme.escape_debug()
        )?;
    }
    Ok(())
}

fn write_stats<W: Write>(out: &mut W, stats: &TokenStats) -> io::Result<()> {
    writeln!(out, "Token statistics:")?;
    for (kind, count) in stats.iter() {
        if kind == TokenKind::Comment {
            writeln!(out, "  {:<18} {count} (removed from analysis)", kind.name())?;
        } else {
            writeln!(out, "  {:<18} {count}", kind.name())?;
        }
    }
    writeln!(
        out,
        "  total {}: {} keywords, {} identifiers, {} operators, {} literals",
        stats.total(),
        stats.keywords(),
        stats.identifiers(),
        stats.operators(),
        stats.literals()
    )
}

fn tokens_json(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "[]".to_owned();
    }
    let rows: Vec<String> = tokens
        .iter()
        .map(|token| {
            format!(
                "    {{ \"line\": {}, \"column\": {}, \"kind\": \"{}\", \"lexeme\": \"{}\" }}",
                token.pos.line,
                token.pos.column,
                token.kind.name(),
                escape_json(&token.lexeme)
            )
        })
        .collect();
    format!("[\n{}\n  ]", rows.join(",\n"))
}

fn stats_json(stats: &TokenStats) -> String {
    let counts: Vec<String> = stats
        .iter()
        .map(|(kind, count)| format!("\"{}\": {count}", kind.name()))
        .collect();
    if counts.is_empty() {
        "{}".to_owned()
    } else {
        format!("{{ {} }}", counts.join(", "))
    }
}
