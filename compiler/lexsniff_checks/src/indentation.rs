//! Python indentation.
//!
//! A stack of valid indentation widths starts at `[0]`. Each content line
//! is compared against the top of the stack before deeper levels are
//! popped, so a dedent to a width that was never opened is reported as
//! such. A line ending in `:` then opens a new level one unit deeper.
//!
//! ```text
//! if x:        width 0  stack [0]      push 4 → [0, 4]
//!     y        width 4  stack [0, 4]   ok
//!   z          width 2  2 ∉ [0, 4]     "Incorrect dedent at line 3"
//! ```

use std::fmt;

/// Widths used when measuring and checking indentation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IndentConfig {
    /// Columns a tab counts for.
    pub tab_width: u32,
    /// Columns one indentation level adds.
    pub indent_unit: u32,
}

impl Default for IndentConfig {
    fn default() -> Self {
        IndentConfig {
            tab_width: 4,
            indent_unit: 4,
        }
    }
}

/// One indentation finding.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum IndentError {
    /// Indented deeper than one unit past the current level.
    Indentation { line: u32, expected: u32, found: u32 },
    /// Dedented to a width no enclosing block uses.
    Dedent { line: u32 },
}

impl IndentError {
    pub fn line(&self) -> u32 {
        match *self {
            IndentError::Indentation { line, .. } | IndentError::Dedent { line } => line,
        }
    }
}

impl fmt::Display for IndentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IndentError::Indentation {
                line,
                expected,
                found,
            } => write!(
                f,
                "Incorrect indentation at line {line} (expected {expected} spaces, found {found} spaces)"
            ),
            IndentError::Dedent { line } => write!(f, "Incorrect dedent at line {line}"),
        }
    }
}

/// Check Python-style indentation with the default widths.
pub fn check_indentation(text: &str) -> Vec<IndentError> {
    check_indentation_with(text, IndentConfig::default())
}

/// Check Python-style indentation.
///
/// Blank and whitespace-only lines are skipped. Only leading spaces and
/// tabs count towards a line's width.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn check_indentation_with(text: &str, config: IndentConfig) -> Vec<IndentError> {
    let mut tracker = IndentTracker::new(config);
    let mut errors = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let number = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let width = leading_width(line, config.tab_width);
        let opens_block = line.trim_end().ends_with(':');
        if let Some(err) = tracker.line(number, width, opens_block) {
            errors.push(err);
        }
    }

    errors
}

/// Width of the leading run of spaces and tabs.
fn leading_width(line: &str, tab_width: u32) -> u32 {
    line.chars()
        .map_while(|c| match c {
            ' ' => Some(1),
            '\t' => Some(tab_width),
            _ => None,
        })
        .fold(0u32, u32::saturating_add)
}

/// The stack of open indentation levels.
///
/// Always non-empty, strictly increasing, and rooted at 0.
#[derive(Clone, Debug)]
struct IndentTracker {
    levels: Vec<u32>,
    unit: u32,
}

impl IndentTracker {
    fn new(config: IndentConfig) -> Self {
        IndentTracker {
            levels: vec![0],
            unit: config.indent_unit,
        }
    }

    fn top(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Feed one content line and return the finding it produces, if any.
    fn line(&mut self, number: u32, width: u32, opens_block: bool) -> Option<IndentError> {
        let top = self.top();
        let error = if width > top && width - top != self.unit {
            Some(IndentError::Indentation {
                line: number,
                expected: top.saturating_add(self.unit),
                found: width,
            })
        } else if width < top && !self.levels.contains(&width) {
            Some(IndentError::Dedent { line: number })
        } else {
            None
        };

        while self.levels.len() > 1 && width < self.top() {
            self.levels.pop();
        }

        if opens_block {
            self.levels.push(width.saturating_add(self.unit));
        } else if width > self.top() {
            self.levels.push(width);
        }

        error
    }

    #[cfg(test)]
    fn levels(&self) -> &[u32] {
        &self.levels
    }
}
