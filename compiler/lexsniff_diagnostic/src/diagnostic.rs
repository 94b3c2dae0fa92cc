//! Core diagnostic types.

use std::fmt;

use lexsniff_lexer::Position;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source position with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub pos: Position,
    pub message: String,
    /// Whether this is the main location of the finding.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(pos: Position, message: impl Into<String>) -> Self {
        Label {
            pos,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(pos: Position, message: impl Into<String>) -> Self {
        Label {
            pos,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// One rendered finding.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    /// Extra context, rendered as `= note:` lines.
    pub notes: Vec<String>,
    /// Hints for fixing the problem, rendered as `= help:` lines.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with the code's default severity and description.
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: code.default_severity(),
            message: code.description().to_owned(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::new(code).with_severity(Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code).with_severity(Severity::Warning)
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, pos: Position, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(pos, message));
        self
    }

    pub fn with_secondary_label(mut self, pos: Position, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(pos, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Position of the first primary label.
    pub fn primary_pos(&self) -> Option<Position> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.pos)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(pos) = self.primary_pos() {
            write!(f, " at {pos}")?;
        }
        Ok(())
    }
}
