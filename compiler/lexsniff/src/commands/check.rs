//! The `check` command: full analysis report.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use lexsniff::{analyze, report, AnalyzeConfig, Language, ReportConfig};

use super::{exit_code, read_source, CliError};

pub fn check_file(
    path: &Path,
    language: Option<Language>,
    config: &ReportConfig,
) -> Result<ExitCode, CliError> {
    let text = read_source(path)?;
    let analyze_config = AnalyzeConfig {
        forced_language: language,
        ..AnalyzeConfig::default()
    };
    let analysis = analyze(&text, &analyze_config);

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let summary = report::write_check(
        &mut stdout.lock(),
        &path.display().to_string(),
        &analysis,
        config,
        is_tty,
    )?;
    Ok(exit_code(summary.errors + summary.suppressed))
}
