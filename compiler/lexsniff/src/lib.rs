//! lexsniff: tokenize a source file, guess whether it is C++, Java or
//! Python, and run structural sanity checks for that language.
//!
//! ```text
//! let analysis = lexsniff::analyze(text, &AnalyzeConfig::default());
//! for diag in analysis.diagnostics() { ... }
//! ```
//!
//! The heavy lifting lives in the `lexsniff_*` crates; this crate sequences
//! them, renders their findings, and hosts the command-line driver.

mod analysis;
mod config;
pub mod problem;
pub mod report;
mod tracing_setup;

pub use analysis::{analyze, Analysis};
pub use config::{color_mode_from_name, AnalyzeConfig, OutputFormat, ReportConfig};
pub use tracing_setup::{init_tracing, LOG_ENV, LOG_TREE_ENV};

pub use lexsniff_detect::Language;
