//! Command handlers for the lexsniff CLI.
//!
//! Each submodule implements one subcommand. Shared file reading and the
//! error type live here.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod check;
mod detect;
mod explain;
mod lex;

pub use check::check_file;
pub use detect::detect_file;
pub use explain::explain_code;
pub use lex::lex_file;

/// Failures that stop a command before it can report anything.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("unknown diagnostic code `{0}` (codes look like L0001, B0002, S0001)")]
    UnknownCode(String),

    #[error("no input file given; try `lexsniff --help`")]
    MissingFile,
}

/// Read `path` as text. Invalid UTF-8 is replaced with U+FFFD, which the
/// scanner then reports as an invalid character.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Exit status for a report: failure when any error was found, shown or not.
pub(crate) fn exit_code(errors: usize) -> ExitCode {
    if errors == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
