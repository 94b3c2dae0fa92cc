//! Fixed keyword table shared by the three candidate grammars.
//!
//! A word flushed by the scanner is a [`TokenKind::Keyword`](crate::TokenKind)
//! when it appears here, whichever grammar it belongs to. Language
//! attribution is not this table's job; the detector keeps its own index.

/// Union of the C++, Java and Python words the scanner treats as keywords.
///
/// Sorted bytewise for binary search.
const KEYWORDS: &[&str] = &[
    "False",
    "None",
    "System",
    "True",
    "abstract",
    "as",
    "cin",
    "class",
    "const",
    "cout",
    "def",
    "elif",
    "else",
    "except",
    "extends",
    "final",
    "finally",
    "for",
    "friend",
    "if",
    "implements",
    "include",
    "interface",
    "lambda",
    "namespace",
    "out",
    "println",
    "private",
    "protected",
    "public",
    "static",
    "synchronized",
    "template",
    "try",
    "typename",
    "using",
    "virtual",
    "void",
    "while",
    "with",
    "yield",
];

/// Whether `word` is exactly one of the scanner's keywords.
#[inline]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for window in KEYWORDS.windows(2) {
            assert!(
                window[0] < window[1],
                "table not sorted: {:?} >= {:?}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn words_from_each_grammar() {
        assert!(is_keyword("namespace"));
        assert!(is_keyword("extends"));
        assert!(is_keyword("lambda"));
    }

    #[test]
    fn shared_words() {
        assert!(is_keyword("class"));
        assert!(is_keyword("public"));
    }

    #[test]
    fn matching_is_exact() {
        assert!(!is_keyword("Class"));
        assert!(!is_keyword("def_"));
        assert!(!is_keyword("int"));
        assert!(!is_keyword(""));
    }
}
