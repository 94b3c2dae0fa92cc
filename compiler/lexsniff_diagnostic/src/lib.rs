//! Diagnostic reporting for lexsniff.
//!
//! Every finding the analysis produces is rendered as a [`Diagnostic`]:
//! - a stable [`ErrorCode`] for `lexsniff explain`
//! - a message saying what is wrong
//! - a primary label saying where
//! - optional notes and suggestions
//!
//! Emitters in [`emitter`] turn diagnostics into terminal or JSON output.

mod diagnostic;
pub mod emitter;
mod error_code;
mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
