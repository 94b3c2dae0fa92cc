//! Embedded long-form explanations for `lexsniff explain`.
//!
//! Each code has a markdown file in this directory, embedded at compile
//! time. Adding a code means adding its file and an entry to `DOCS`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Markdown explanation for `code`, if one exists.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Every documented code.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::L0001, include_str!("L0001.md")),
    (ErrorCode::L0002, include_str!("L0002.md")),
    (ErrorCode::Q0001, include_str!("Q0001.md")),
    (ErrorCode::B0001, include_str!("B0001.md")),
    (ErrorCode::B0002, include_str!("B0002.md")),
    (ErrorCode::I0001, include_str!("I0001.md")),
    (ErrorCode::I0002, include_str!("I0002.md")),
    (ErrorCode::S0001, include_str!("S0001.md")),
];

#[cfg(test)]
mod tests;
