//! The `lex` command: token listing.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use lexsniff::{report, ReportConfig};
use lexsniff_lexer::tokenize;

use super::{exit_code, read_source, CliError};

pub fn lex_file(path: &Path, config: &ReportConfig) -> Result<ExitCode, CliError> {
    let text = read_source(path)?;
    let lexed = tokenize(&text);

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let summary = report::write_lex(
        &mut stdout.lock(),
        &path.display().to_string(),
        &lexed,
        config,
        is_tty,
    )?;
    Ok(exit_code(summary.errors + summary.suppressed))
}
