//! Line/column positions shared by every diagnostic in the workspace.

use std::fmt;

/// A 1-based line and column in the scanned text.
///
/// Columns count characters, not bytes, so a multi-byte character advances
/// the column by one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first character of any text.
    pub const START: Position = Position { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
