use lexsniff_diagnostic::{Diagnostic, ErrorCode};
use lexsniff_lexer::{LexError, LexErrorKind};

use super::ToDiagnostic;

impl ToDiagnostic for LexError {
    #[cold]
    fn to_diagnostic(&self) -> Diagnostic {
        match self.kind {
            LexErrorKind::InvalidCharacter { ch } => Diagnostic::error(ErrorCode::L0001)
                .with_message(format!("invalid character U+{:04X}", u32::from(ch)))
                .with_label(self.pos, "not printable ASCII or whitespace")
                .with_note("the character is dropped; text on either side of it joins up"),
            LexErrorKind::DigitLeadingIdentifier => Diagnostic::error(ErrorCode::L0002)
                .with_message(format!(
                    "invalid identifier `{}`: cannot start with a number",
                    self.lexeme
                ))
                .with_label(self.pos, "starts with a digit")
                .with_suggestion("start the name with a letter or `_`"),
        }
    }
}
