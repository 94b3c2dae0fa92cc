//! Human-readable diagnostic output with optional ANSI colors.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::{DiagnosticEmitter, EmitSummary};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// Prefixed to label positions as `path:line:col`.
    path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter.
    ///
    /// `is_tty` says whether `writer` is a terminal; it decides
    /// [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path: None,
        }
    }

    /// Create a terminal emitter for stdout.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stdout> {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }

    /// Show `path` in front of every label position.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(severity.as_str(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} ");
            if let Some(path) = &self.path {
                let _ = write!(self.writer, "{path}:");
            }
            let _ = write!(self.writer, "{}", label.pos);
            if !label.message.is_empty() {
                let _ = write!(self.writer, ": ");
                let color = if label.is_primary {
                    colors::ERROR
                } else {
                    colors::SECONDARY
                };
                self.write_colored(&label.message, color);
            }
            let _ = writeln!(self.writer);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, summary: &EmitSummary) {
        let EmitSummary {
            errors,
            warnings,
            suppressed,
        } = *summary;

        if errors > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(self.writer, ": {errors} error{} found", plural_s(errors));
            if warnings > 0 {
                let _ = write!(
                    self.writer,
                    "; {warnings} warning{} emitted",
                    plural_s(warnings)
                );
            }
            let _ = writeln!(self.writer);
        } else if warnings > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warnings} warning{} emitted",
                plural_s(warnings)
            );
        }

        if suppressed > 0 {
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(
                self.writer,
                ": {suppressed} more error{} not shown; raise --error-limit to see them",
                plural_s(suppressed)
            );
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
