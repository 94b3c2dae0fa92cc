//! The `explain` command: documentation for a diagnostic code.

use std::process::ExitCode;

use lexsniff_diagnostic::{ErrorCode, ErrorDocs};

use super::CliError;

pub fn explain_code(code_str: &str) -> Result<ExitCode, CliError> {
    let doc = code_str
        .parse::<ErrorCode>()
        .ok()
        .and_then(ErrorDocs::get)
        .ok_or_else(|| CliError::UnknownCode(code_str.to_owned()))?;
    println!("{doc}");
    Ok(ExitCode::SUCCESS)
}
