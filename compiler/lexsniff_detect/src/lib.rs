//! Language detection for lexsniff token streams.
//!
//! A [`KeywordIndex`] maps keyword spellings to the [`Language`]s that use
//! them; [`classify`] combines index hits, lexeme triggers and two
//! structural signals into a [`LanguageScore`] and picks the winner.

mod classifier;
mod keyword_index;
mod language;

pub use classifier::{
    classify, classify_with_scores, score, Classification, LanguageScore, BRACE_STYLE_POINTS,
    KEYWORD_POINTS, LAYOUT_POINTS,
};
pub use keyword_index::{KeywordEntry, KeywordIndex, KeywordMatch};
pub use language::{Language, LanguageSet};
