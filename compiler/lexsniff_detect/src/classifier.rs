//! Heuristic language classifier.
//!
//! Every token is scored against the [`KeywordIndex`] and a fixed table of
//! lexeme triggers, then one structural pass looks at the stream as a
//! whole. The highest accumulator wins; ties go to the earlier entry in
//! [`Language::CANDIDATES`].

use std::fmt;

use lexsniff_lexer::{Token, TokenKind};

use crate::{KeywordIndex, Language};

/// Points for each language attached to a lexeme found in the index.
pub const KEYWORD_POINTS: u32 = 2;

/// Bonus for both brace languages when the stream has a `;` and a brace.
pub const BRACE_STYLE_POINTS: u32 = 3;

/// Bonus for Python when a line starts with a plain identifier.
pub const LAYOUT_POINTS: u32 = 5;

// ─── Triggers ─────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
enum Pattern {
    Contains(&'static str),
    Equals(&'static str),
}

impl Pattern {
    fn matches(self, lexeme: &str) -> bool {
        match self {
            Pattern::Contains(needle) => lexeme.contains(needle),
            Pattern::Equals(word) => lexeme == word,
        }
    }
}

struct Trigger {
    pattern: Pattern,
    language: Language,
    points: u32,
}

const fn trigger(pattern: Pattern, language: Language, points: u32) -> Trigger {
    Trigger {
        pattern,
        language,
        points,
    }
}

/// Evaluated independently against every lexeme; several may fire at once.
///
/// The multi-word patterns can only match lexemes that keep their inner
/// spaces: comments, string literals and directives.
const TRIGGERS: &[Trigger] = &[
    trigger(Pattern::Contains("::"), Language::Cpp, 3),
    trigger(Pattern::Contains("cout"), Language::Cpp, 3),
    trigger(Pattern::Contains("#include"), Language::Cpp, 5),
    trigger(Pattern::Contains("System.out.println"), Language::Java, 5),
    trigger(Pattern::Contains("public class"), Language::Java, 4),
    trigger(Pattern::Contains("extends"), Language::Java, 2),
    trigger(Pattern::Contains("def "), Language::Python, 4),
    trigger(Pattern::Contains("import "), Language::Python, 2),
    trigger(Pattern::Equals("self"), Language::Python, 3),
];

// ─── Scores ───────────────────────────────────────────────────

/// One accumulator per candidate language, all starting at zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LanguageScore {
    points: [u32; 3],
}

impl LanguageScore {
    /// Accumulated points for `lang`. Always zero for `Unknown`.
    pub fn get(&self, lang: Language) -> u32 {
        lang.candidate_index().map_or(0, |i| self.points[i])
    }

    /// Add `points` to `lang`. Ignored for `Unknown`.
    pub fn add(&mut self, lang: Language, points: u32) {
        if let Some(i) = lang.candidate_index() {
            self.points[i] = self.points[i].saturating_add(points);
        }
    }

    /// The winning language.
    ///
    /// A later candidate must beat the current best strictly, so ties keep
    /// the higher-priority language. A best score of zero is `Unknown`.
    pub fn best(&self) -> Language {
        let mut best = Language::Unknown;
        let mut top = 0;
        for (lang, points) in self.iter() {
            if points > top {
                best = lang;
                top = points;
            }
        }
        best
    }

    /// `(language, points)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, u32)> + '_ {
        Language::CANDIDATES.into_iter().zip(self.points)
    }
}

impl fmt::Display for LanguageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (lang, points)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{lang}={points}")?;
        }
        Ok(())
    }
}

/// Result of [`classify_with_scores`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    pub language: Language,
    pub scores: LanguageScore,
}

// ─── Scoring ──────────────────────────────────────────────────

/// Score every candidate language for `tokens`.
pub fn score(tokens: &[Token], index: &KeywordIndex) -> LanguageScore {
    let mut scores = LanguageScore::default();

    for token in tokens {
        let lexeme = token.lexeme.as_str();
        for lang in index.languages(lexeme).languages() {
            scores.add(lang, KEYWORD_POINTS);
        }
        for t in TRIGGERS.iter().filter(|t| t.pattern.matches(lexeme)) {
            scores.add(t.language, t.points);
        }
    }

    let has_terminator = tokens.iter().any(|t| t.is_separator(';'));
    let has_brace = tokens
        .iter()
        .any(|t| t.is_separator('{') || t.is_separator('}'));
    if has_terminator && has_brace {
        for lang in Language::CANDIDATES.into_iter().filter(|l| l.uses_braces()) {
            scores.add(lang, BRACE_STYLE_POINTS);
        }
    }

    // Adjacent positions in the stream, not a search by lexeme value.
    let line_starts_with_name = tokens
        .windows(2)
        .any(|w| w[0].kind == TokenKind::Newline && w[1].kind == TokenKind::Identifier);
    if line_starts_with_name {
        scores.add(Language::Python, LAYOUT_POINTS);
    }

    scores
}

/// Classify `tokens`, keeping the per-language scores.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn classify_with_scores(tokens: &[Token], index: &KeywordIndex) -> Classification {
    let scores = score(tokens, index);
    let language = scores.best();
    tracing::debug!(%scores, %language, "classified");
    Classification { language, scores }
}

/// Guess which candidate grammar `tokens` were written in.
pub fn classify(tokens: &[Token], index: &KeywordIndex) -> Language {
    classify_with_scores(tokens, index).language
}
