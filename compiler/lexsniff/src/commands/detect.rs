//! The `detect` command: language guess with its scores.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use lexsniff::{report, OutputFormat};
use lexsniff_detect::{classify_with_scores, KeywordIndex};
use lexsniff_lexer::tokenize;

use super::{read_source, CliError};

pub fn detect_file(path: &Path, format: OutputFormat) -> Result<ExitCode, CliError> {
    let text = read_source(path)?;
    let lexed = tokenize(&text);
    let detection = classify_with_scores(&lexed.tokens, KeywordIndex::shared());
    report::write_detection(
        &mut io::stdout().lock(),
        &path.display().to_string(),
        &detection,
        format,
    )?;
    Ok(ExitCode::SUCCESS)
}
