//! The analysis pipeline.
//!
//! ```text
//! text ─► tokenize ─► classify ─┬─► brackets, quotes     (always)
//!                               ├─► indentation          (Python)
//!                               └─► statement terminators (otherwise)
//! ```

use lexsniff_checks::{
    check_brackets, check_indentation_with, check_quotes, check_semicolons, BracketError,
    IndentError, QuoteError, SemicolonError,
};
use lexsniff_detect::{classify_with_scores, Classification, KeywordIndex, Language};
use lexsniff_diagnostic::Diagnostic;
use lexsniff_lexer::{tokenize, LexError, Token, TokenStats};

use crate::problem::ToDiagnostic;
use crate::AnalyzeConfig;

/// Everything one run over a text produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub lex_errors: Vec<LexError>,
    /// The language the checks ran for.
    pub language: Language,
    /// Detection result; `None` when the language was forced.
    pub detection: Option<Classification>,
    pub quote_errors: Vec<QuoteError>,
    pub bracket_errors: Vec<BracketError>,
    /// Only populated for Python.
    pub indent_errors: Vec<IndentError>,
    /// Only populated for brace languages.
    pub semicolon_errors: Vec<SemicolonError>,
}

impl Analysis {
    /// Every finding as a diagnostic, grouped by check: lexical, quote,
    /// bracket, indentation, statement terminator.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        fn render<T: ToDiagnostic>(items: &[T]) -> impl Iterator<Item = Diagnostic> + '_ {
            items.iter().map(ToDiagnostic::to_diagnostic)
        }

        render(&self.lex_errors)
            .chain(render(&self.quote_errors))
            .chain(render(&self.bracket_errors))
            .chain(render(&self.indent_errors))
            .chain(render(&self.semicolon_errors))
            .collect()
    }

    /// Total number of findings.
    pub fn finding_count(&self) -> usize {
        self.lex_errors.len()
            + self.quote_errors.len()
            + self.bracket_errors.len()
            + self.indent_errors.len()
            + self.semicolon_errors.len()
    }

    /// No findings of any kind.
    pub fn is_clean(&self) -> bool {
        self.finding_count() == 0
    }

    /// Whether the language came from detection rather than configuration.
    pub fn was_detected(&self) -> bool {
        self.detection.is_some()
    }

    pub fn stats(&self) -> TokenStats {
        TokenStats::from_tokens(&self.tokens)
    }
}

/// Tokenize, classify and check `text`.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn analyze(text: &str, config: &AnalyzeConfig) -> Analysis {
    let lexed = tokenize(text);

    let (language, detection) = match config.forced_language {
        Some(language) => (language, None),
        None => {
            let detection = classify_with_scores(&lexed.tokens, KeywordIndex::shared());
            (detection.language, Some(detection))
        }
    };

    let quote_errors = check_quotes(text);
    let bracket_errors = check_brackets(text);
    let (indent_errors, semicolon_errors) = if language.is_layout_sensitive() {
        (check_indentation_with(text, config.indent), Vec::new())
    } else {
        (Vec::new(), check_semicolons(text, language))
    };

    let analysis = Analysis {
        tokens: lexed.tokens,
        lex_errors: lexed.errors,
        language,
        detection,
        quote_errors,
        bracket_errors,
        indent_errors,
        semicolon_errors,
    };
    tracing::debug!(
        %language,
        findings = analysis.finding_count(),
        "analysis complete"
    );
    analysis
}
