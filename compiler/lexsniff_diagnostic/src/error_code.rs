//! Error codes for every lexsniff finding.
//!
//! The letter names the check that produced the finding:
//! - `L`: lexical (scanner)
//! - `Q`: quote balance
//! - `B`: bracket nesting
//! - `I`: Python indentation
//! - `S`: statement terminators

use std::fmt;

use crate::Severity;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Invalid character in source
    L0001,
    /// Identifier starting with a digit
    L0002,
    /// Unterminated quote
    Q0001,
    /// Unmatched closing bracket
    B0001,
    /// Unclosed opening bracket
    B0002,
    /// Incorrect indentation
    I0001,
    /// Incorrect dedent
    I0002,
    /// Missing statement terminator
    S0001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::L0001,
        ErrorCode::L0002,
        ErrorCode::Q0001,
        ErrorCode::B0001,
        ErrorCode::B0002,
        ErrorCode::I0001,
        ErrorCode::I0002,
        ErrorCode::S0001,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::L0001 => "L0001",
            ErrorCode::L0002 => "L0002",
            ErrorCode::Q0001 => "Q0001",
            ErrorCode::B0001 => "B0001",
            ErrorCode::B0002 => "B0002",
            ErrorCode::I0001 => "I0001",
            ErrorCode::I0002 => "I0002",
            ErrorCode::S0001 => "S0001",
        }
    }

    /// Short summary, used as the default diagnostic message.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::L0001 => "invalid character",
            ErrorCode::L0002 => "identifier cannot start with a number",
            ErrorCode::Q0001 => "unterminated quote",
            ErrorCode::B0001 => "unmatched closing bracket",
            ErrorCode::B0002 => "unclosed opening bracket",
            ErrorCode::I0001 => "incorrect indentation",
            ErrorCode::I0002 => "incorrect dedent",
            ErrorCode::S0001 => "missing statement terminator",
        }
    }

    /// The missing-terminator check is a line heuristic, so it only warns.
    pub const fn default_severity(self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    pub const fn is_warning(self) -> bool {
        matches!(self, ErrorCode::S0001)
    }

    pub const fn is_lexical(self) -> bool {
        matches!(self, ErrorCode::L0001 | ErrorCode::L0002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code like `"B0001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
