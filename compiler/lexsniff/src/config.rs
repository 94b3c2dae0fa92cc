//! Analysis and report settings.

use lexsniff_checks::IndentConfig;
use lexsniff_detect::Language;
use lexsniff_diagnostic::emitter::ColorMode;

/// Settings for [`analyze`](crate::analyze).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AnalyzeConfig {
    /// Skip detection and check the text as this language.
    pub forced_language: Option<Language>,
    pub indent: IndentConfig,
}

impl AnalyzeConfig {
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.forced_language = Some(language);
        self
    }
}

/// Report output format.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "terminal" | "text" => Some(OutputFormat::Terminal),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Parse `auto`, `always` or `never`.
pub fn color_mode_from_name(name: &str) -> Option<ColorMode> {
    match name.to_ascii_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

/// How a report is rendered.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ReportConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Maximum errors shown; 0 is unlimited.
    pub error_limit: usize,
    /// Include the token table.
    pub show_tokens: bool,
    /// Include token statistics.
    pub show_stats: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults() {
        let config = AnalyzeConfig::default();
        assert_eq!(config.forced_language, None);
        assert_eq!(config.indent, IndentConfig::default());

        let report = ReportConfig::default();
        assert_eq!(report.format, OutputFormat::Terminal);
        assert_eq!(report.color, ColorMode::Auto);
        assert_eq!(report.error_limit, 0);
    }

    #[test]
    fn forced_language() {
        let config = AnalyzeConfig::default().with_language(Language::Java);
        assert_eq!(config.forced_language, Some(Language::Java));
    }

    #[test]
    fn names_parse() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
        assert_eq!(color_mode_from_name("never"), Some(ColorMode::Never));
        assert_eq!(color_mode_from_name("sometimes"), None);
    }
}
