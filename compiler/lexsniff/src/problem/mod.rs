//! Findings rendered as diagnostics.
//!
//! The analysis crates return plain finding structs; this module owns the
//! user-facing wording. Every finding type implements [`ToDiagnostic`].
//!
//! | Finding | Code |
//! |---|---|
//! | `LexError` | `L0001`, `L0002` |
//! | `QuoteError` | `Q0001` |
//! | `BracketError` | `B0001`, `B0002` |
//! | `IndentError` | `I0001`, `I0002` |
//! | `SemicolonError` | `S0001` |

mod checks;
mod lex;

use lexsniff_diagnostic::Diagnostic;

/// Render a finding as a [`Diagnostic`].
pub trait ToDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}
