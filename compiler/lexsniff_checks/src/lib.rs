//! Structural sanity checks over raw source text.
//!
//! Each checker is an independent, total function of the text (two also
//! take the target [`Language`](lexsniff_detect::Language)) and returns
//! whatever findings it collected, in source order.
//!
//! | Checker | Applies to | Finding |
//! |---|---|---|
//! | [`check_brackets`] | every language | [`BracketError`] |
//! | [`check_quotes`] | every language | [`QuoteError`] |
//! | [`check_indentation`] | Python | [`IndentError`] |
//! | [`check_semicolons`] | C++, Java | [`SemicolonError`] |

mod brackets;
mod indentation;
mod quotes;
mod semicolons;

pub use brackets::{check_brackets, BracketError, BracketErrorKind};
pub use indentation::{check_indentation, check_indentation_with, IndentConfig, IndentError};
pub use quotes::{check_quotes, QuoteError};
pub use semicolons::{check_semicolons, statement_markers, SemicolonError};
