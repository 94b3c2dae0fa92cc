//! Candidate grammars and sets of them.

use std::fmt;

use bitflags::bitflags;

/// Detected language label.
///
/// The three real candidates are listed in tie-breaking priority order:
/// when two candidates share the highest score, the earlier one wins.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Language {
    Cpp,
    Java,
    Python,
    /// No candidate scored above zero.
    Unknown,
}

impl Language {
    /// The real candidates, highest tie-breaking priority first.
    pub const CANDIDATES: [Language; 3] = [Language::Cpp, Language::Java, Language::Python];

    /// Display label: `C++`, `Java`, `Python` or `Unknown`.
    pub const fn label(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Unknown => "Unknown",
        }
    }

    /// Parse a display label or a lowercase alias (`cpp`, `c++`, `java`,
    /// `python`, `py`).
    pub fn from_label(label: &str) -> Option<Language> {
        match label {
            "C++" | "c++" | "cpp" | "Cpp" => Some(Language::Cpp),
            "Java" | "java" => Some(Language::Java),
            "Python" | "python" | "py" => Some(Language::Python),
            "Unknown" | "unknown" => Some(Language::Unknown),
            _ => None,
        }
    }

    /// Block structure comes from `{ }` and statements end with `;`.
    pub const fn uses_braces(self) -> bool {
        matches!(self, Language::Cpp | Language::Java)
    }

    /// Block structure comes from indentation.
    pub const fn is_layout_sensitive(self) -> bool {
        matches!(self, Language::Python)
    }

    /// Position in [`Language::CANDIDATES`]; `None` for `Unknown`.
    pub(crate) const fn candidate_index(self) -> Option<usize> {
        match self {
            Language::Cpp => Some(0),
            Language::Java => Some(1),
            Language::Python => Some(2),
            Language::Unknown => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

bitflags! {
    /// The candidate languages a keyword belongs to.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct LanguageSet: u8 {
        const CPP = 1;
        const JAVA = 1 << 1;
        const PYTHON = 1 << 2;
    }
}

impl LanguageSet {
    /// Member languages in [`Language::CANDIDATES`] order.
    pub fn languages(self) -> impl Iterator<Item = Language> {
        Language::CANDIDATES
            .into_iter()
            .filter(move |&lang| self.contains(LanguageSet::from(lang)))
    }
}

impl From<Language> for LanguageSet {
    fn from(lang: Language) -> Self {
        match lang {
            Language::Cpp => LanguageSet::CPP,
            Language::Java => LanguageSet::JAVA,
            Language::Python => LanguageSet::PYTHON,
            Language::Unknown => LanguageSet::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labels_round_trip() {
        for lang in Language::CANDIDATES {
            assert_eq!(Language::from_label(lang.label()), Some(lang));
        }
        assert_eq!(Language::from_label("cpp"), Some(Language::Cpp));
        assert_eq!(Language::from_label("rust"), None);
    }

    #[test]
    fn set_iterates_in_priority_order() {
        let set = LanguageSet::PYTHON | LanguageSet::CPP;
        assert_eq!(
            set.languages().collect::<Vec<_>>(),
            vec![Language::Cpp, Language::Python]
        );
    }

    #[test]
    fn unknown_is_the_empty_set() {
        assert!(LanguageSet::from(Language::Unknown).is_empty());
        assert_eq!(LanguageSet::default().languages().count(), 0);
    }

    #[test]
    fn grammar_families() {
        assert!(Language::Cpp.uses_braces());
        assert!(Language::Java.uses_braces());
        assert!(!Language::Python.uses_braces());
        assert!(Language::Python.is_layout_sensitive());
        assert!(!Language::Unknown.uses_braces());
    }
}
