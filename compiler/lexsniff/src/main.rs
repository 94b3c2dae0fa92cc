//! lexsniff command-line interface.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lexsniff::{color_mode_from_name, init_tracing, Language, OutputFormat, ReportConfig};
use lexsniff_diagnostic::emitter::ColorMode;

use commands::CliError;

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_name(s).ok_or_else(|| format!("'{s}' is not one of: terminal, json"))
}

fn parse_color(s: &str) -> Result<ColorMode, String> {
    color_mode_from_name(s).ok_or_else(|| format!("'{s}' is not one of: auto, always, never"))
}

fn parse_language(s: &str) -> Result<Language, String> {
    match Language::from_label(s) {
        Some(Language::Unknown) | None => Err(format!("'{s}' is not one of: cpp, java, python")),
        Some(language) => Ok(language),
    }
}

/// Tokenize source text, guess whether it is C++, Java or Python, and
/// check its brackets, quotes, indentation and statement terminators.
#[derive(Parser, Debug)]
#[command(name = "lexsniff", version)]
#[command(after_help = "\
Examples:
  lexsniff main.cpp                    Check a file (same as `lexsniff check`)
  lexsniff lex main.cpp --format json  Token listing as JSON
  lexsniff detect script.py            Show per-language scores
  lexsniff explain B0001               Explain a diagnostic code

Set LEXSNIFF_LOG=debug to trace the pipeline.")]
struct Cli {
    /// File to check when no subcommand is given
    file: Option<PathBuf>,

    /// Output format: terminal or json
    #[arg(long, global = true, env = "LEXSNIFF_FORMAT", default_value = "terminal", value_parser = parse_format)]
    format: OutputFormat,

    /// Colored output: auto, always or never
    #[arg(long, global = true, env = "LEXSNIFF_COLOR", default_value = "auto", value_parser = parse_color)]
    color: ColorMode,

    /// Check as this language instead of detecting it (cpp, java, python)
    #[arg(long, global = true, value_parser = parse_language)]
    language: Option<Language>,

    /// Stop showing errors after this many (0 = unlimited)
    #[arg(long, global = true, default_value_t = 0)]
    error_limit: usize,

    /// Include the token table in the check report
    #[arg(long, global = true)]
    tokens: bool,

    /// Include token statistics in the check report
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every check and report the findings
    Check { file: PathBuf },
    /// List tokens, token statistics and lexical errors
    Lex { file: PathBuf },
    /// Show the detected language and per-language scores
    Detect { file: PathBuf },
    /// Explain a diagnostic code such as B0001
    Explain { code: String },
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            format: self.format,
            color: self.color,
            error_limit: self.error_limit,
            show_tokens: self.tokens,
            show_stats: self.stats,
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let report = cli.report_config();
    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file, cli.language, &report),
        Some(Command::Lex { file }) => commands::lex_file(&file, &report),
        Some(Command::Detect { file }) => commands::detect_file(&file, report.format),
        Some(Command::Explain { code }) => commands::explain_code(&code),
        None => match cli.file {
            Some(file) => commands::check_file(&file, cli.language, &report),
            None => Err(CliError::MissingFile),
        },
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("lexsniff: {err}");
            ExitCode::from(2)
        }
    }
}
