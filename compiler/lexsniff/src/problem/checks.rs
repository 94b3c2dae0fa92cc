use lexsniff_checks::{BracketError, BracketErrorKind, IndentError, QuoteError, SemicolonError};
use lexsniff_diagnostic::{Diagnostic, ErrorCode};
use lexsniff_lexer::Position;

use super::ToDiagnostic;

impl ToDiagnostic for QuoteError {
    #[cold]
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::Q0001)
            .with_message(self.message())
            .with_label(self.pos, "quote opened here is never closed")
            .with_note("`\"` and `'` are not told apart, so either one closes the region")
    }
}

impl ToDiagnostic for BracketError {
    #[cold]
    fn to_diagnostic(&self) -> Diagnostic {
        match self.kind {
            BracketErrorKind::Unmatched => Diagnostic::error(ErrorCode::B0001)
                .with_message(self.message())
                .with_label(self.pos, "no matching opener"),
            BracketErrorKind::Unclosed => Diagnostic::error(ErrorCode::B0002)
                .with_message(self.message())
                .with_label(self.pos, "opened here, never closed"),
        }
    }
}

impl ToDiagnostic for IndentError {
    #[cold]
    fn to_diagnostic(&self) -> Diagnostic {
        let pos = Position::new(self.line(), 1);
        match *self {
            IndentError::Indentation {
                expected, found, ..
            } => Diagnostic::error(ErrorCode::I0001)
                .with_message(self.to_string())
                .with_label(pos, format!("indented {found} columns"))
                .with_suggestion(format!("indent this line by {expected} columns")),
            IndentError::Dedent { .. } => Diagnostic::error(ErrorCode::I0002)
                .with_message(self.to_string())
                .with_label(pos, "width matches no enclosing block"),
        }
    }
}

impl ToDiagnostic for SemicolonError {
    #[cold]
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(ErrorCode::S0001)
            .with_message(self.message())
            .with_label(self.pos(), format!("`{}` statement", self.marker))
            .with_note(format!("line {}: {}", self.line, self.text.trim()))
            .with_suggestion("end the statement with `;`")
    }
}
