//! Diagnostic emitters.
//!
//! - Terminal: human-readable output with optional ANSI colors
//! - JSON: machine-readable output for tooling
//!
//! Both implement [`DiagnosticEmitter`].

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write;

use crate::Diagnostic;

/// Returns a trailing comma for JSON list serialization.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// Counts from one emission pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EmitSummary {
    /// Errors written.
    pub errors: usize,
    /// Warnings written.
    pub warnings: usize,
    /// Errors dropped by the error limit.
    pub suppressed: usize,
}

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Emit `diagnostics` in order, dropping errors past `error_limit`.
    ///
    /// A limit of 0 means unlimited. Warnings and notes are never dropped.
    fn emit_limited(&mut self, diagnostics: &[Diagnostic], error_limit: usize) -> EmitSummary {
        let mut summary = EmitSummary::default();
        for diag in diagnostics {
            if diag.is_error() {
                if error_limit > 0 && summary.errors >= error_limit {
                    summary.suppressed += 1;
                    continue;
                }
                summary.errors += 1;
            } else if diag.is_warning() {
                summary.warnings += 1;
            }
            self.emit(diag);
        }
        summary
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing error/warning counts.
    fn emit_summary(&mut self, summary: &EmitSummary);
}

/// Escape a string for embedding in a JSON string literal.
pub fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests;
