use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_index_finds_nothing() {
    let index = KeywordIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.lookup("def"), None);
    assert!(index.languages("def").is_empty());
}

#[test]
fn insert_then_lookup() {
    let mut index = KeywordIndex::new();
    index.insert("def", Language::Python);
    assert_eq!(
        index.lookup("def"),
        Some(KeywordEntry {
            languages: LanguageSet::PYTHON,
            frequency: 1,
        })
    );
    assert_eq!(index.len(), 1);
}

#[test]
fn prefixes_are_not_matches() {
    let mut index = KeywordIndex::new();
    index.insert("template", Language::Cpp);
    assert!(!index.contains("temp"));
    assert!(!index.contains("templates"));
    assert!(!index.contains(""));
}

#[test]
fn reinsert_unions_languages_and_counts() {
    let mut index = KeywordIndex::new();
    index.insert("class", Language::Cpp);
    index.insert("class", Language::Java);
    index.insert("class", Language::Java);
    let entry = index.lookup("class");
    assert_eq!(
        entry,
        Some(KeywordEntry {
            languages: LanguageSet::CPP | LanguageSet::JAVA,
            frequency: 3,
        })
    );
    assert_eq!(index.len(), 1);
}

#[test]
fn shared_paths_stay_distinct() {
    let mut index = KeywordIndex::new();
    index.insert("in", Language::Python);
    index.insert("include", Language::Cpp);
    index.insert("interface", Language::Java);
    assert_eq!(index.languages("in"), LanguageSet::PYTHON);
    assert_eq!(index.languages("include"), LanguageSet::CPP);
    assert_eq!(index.languages("interface"), LanguageSet::JAVA);
    assert_eq!(index.len(), 3);
}

#[test]
fn lookup_is_case_sensitive() {
    let index = KeywordIndex::builtin();
    assert!(index.contains("None"));
    assert!(!index.contains("none"));
}

#[test]
fn builtin_covers_each_language() {
    let index = KeywordIndex::builtin();
    assert_eq!(index.languages("cout"), LanguageSet::CPP);
    assert_eq!(index.languages("extends"), LanguageSet::JAVA);
    assert_eq!(index.languages("self"), LanguageSet::PYTHON);
    assert_eq!(index.len(), 37);
}

#[test]
fn shared_is_the_builtin_index() {
    let shared = KeywordIndex::shared();
    assert!(std::ptr::eq(shared, KeywordIndex::shared()));
    assert_eq!(shared.len(), KeywordIndex::builtin().len());
}

#[test]
fn prefix_query_is_sorted() {
    let index = KeywordIndex::builtin();
    let words: Vec<String> = index
        .with_prefix("n")
        .into_iter()
        .map(|m| m.word)
        .collect();
    assert_eq!(words, vec!["namespace", "noexcept", "nonlocal", "nullptr"]);
}

#[test]
fn prefix_query_includes_exact_word() {
    let index = KeywordIndex::builtin();
    let matches = index.with_prefix("System");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].word, "System.out.println");
    assert_eq!(matches[0].entry.languages, LanguageSet::JAVA);
}

#[test]
fn prefix_query_without_hits_is_empty() {
    let index = KeywordIndex::builtin();
    assert!(index.with_prefix("zz").is_empty());
}

#[test]
fn empty_prefix_lists_everything() {
    let index = KeywordIndex::builtin();
    assert_eq!(index.with_prefix("").len(), index.len());
}
