//! Missing statement terminators on I/O lines.
//!
//! A heuristic: only lines that contain a language's console I/O marker
//! are inspected, and any `;` anywhere on the line satisfies the check.

use std::fmt;

use lexsniff_detect::Language;
use lexsniff_lexer::Position;

const CPP_MARKERS: &[&str] = &["cout", "cin"];

const JAVA_MARKERS: &[&str] = &["System.out.println", "System.out.print", "Scanner"];

/// The I/O markers inspected for `language`; empty for layout languages.
pub fn statement_markers(language: Language) -> &'static [&'static str] {
    match language {
        Language::Cpp => CPP_MARKERS,
        Language::Java => JAVA_MARKERS,
        Language::Python | Language::Unknown => &[],
    }
}

/// An I/O line with no `;` on it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SemicolonError {
    /// 1-based line number.
    pub line: u32,
    /// The full line, without its line terminator.
    pub text: String,
    /// The marker that selected the line.
    pub marker: &'static str,
}

impl SemicolonError {
    /// Start of the offending line.
    pub fn pos(&self) -> Position {
        Position::new(self.line, 1)
    }

    pub fn message(&self) -> &'static str {
        "missing ';' after statement"
    }
}

impl fmt::Display for SemicolonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.message(), self.text)
    }
}

/// Check I/O statements for a missing `;`.
///
/// Returns nothing for languages without statement terminators.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len(), %language))]
pub fn check_semicolons(text: &str, language: Language) -> Vec<SemicolonError> {
    let markers = statement_markers(language);
    if markers.is_empty() {
        return Vec::new();
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.contains(';'))
        .filter_map(|(idx, line)| {
            let marker = markers.iter().copied().find(|m| line.contains(m))?;
            Some(SemicolonError {
                line: u32::try_from(idx + 1).unwrap_or(u32::MAX),
                text: line.to_owned(),
                marker,
            })
        })
        .collect()
}
