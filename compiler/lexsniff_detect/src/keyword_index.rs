//! Prefix tree mapping keyword spellings to the languages that use them.
//!
//! Built once, then read-only. Each node exclusively owns its children, so
//! the whole tree is dropped with the index. There is no removal.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::{Language, LanguageSet};

/// C++ words that signal the C++ grammar.
const CPP_KEYWORDS: &[&str] = &[
    "cout",
    "cin",
    "include",
    "namespace",
    "using",
    "template",
    "typename",
    "virtual",
    "friend",
    "operator",
    "nullptr",
    "constexpr",
    "noexcept",
];

/// Java words that signal the Java grammar.
///
/// `System.out.println` can never match a single scanner token (`.` is a
/// separator) but is kept so prefix queries see it.
const JAVA_KEYWORDS: &[&str] = &[
    "System.out.println",
    "public",
    "private",
    "protected",
    "interface",
    "implements",
    "extends",
    "super",
    "synchronized",
    "volatile",
    "transient",
];

/// Python words that signal the Python grammar.
const PYTHON_KEYWORDS: &[&str] = &[
    "def", "lambda", "yield", "with", "as", "True", "False", "None", "self", "nonlocal", "global",
    "async", "await",
];

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    terminal: bool,
    frequency: u32,
    languages: LanguageSet,
}

/// What the index knows about one spelling.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeywordEntry {
    /// Languages the spelling was inserted for.
    pub languages: LanguageSet,
    /// How many times the spelling was inserted.
    pub frequency: u32,
}

/// One result of [`KeywordIndex::with_prefix`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeywordMatch {
    pub word: String,
    pub entry: KeywordEntry,
}

/// Keyword prefix tree.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    root: TrieNode,
    /// Number of distinct terminal spellings.
    len: usize,
}

impl KeywordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of every detection keyword for C++, Java and Python.
    pub fn builtin() -> Self {
        let mut index = KeywordIndex::new();
        let tables = [
            (Language::Cpp, CPP_KEYWORDS),
            (Language::Java, JAVA_KEYWORDS),
            (Language::Python, PYTHON_KEYWORDS),
        ];
        for (lang, words) in tables {
            for word in words {
                index.insert(word, lang);
            }
        }
        index
    }

    /// Process-wide [`builtin`](Self::builtin) index, built on first use.
    pub fn shared() -> &'static KeywordIndex {
        static SHARED: OnceLock<KeywordIndex> = OnceLock::new();
        SHARED.get_or_init(KeywordIndex::builtin)
    }

    /// Insert `word` for `language`.
    ///
    /// Re-inserting a spelling bumps its frequency and unions the language
    /// into its set.
    pub fn insert(&mut self, word: &str, language: Language) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
        node.frequency = node.frequency.saturating_add(1);
        node.languages |= LanguageSet::from(language);
    }

    /// Exact-match lookup.
    pub fn lookup(&self, word: &str) -> Option<KeywordEntry> {
        let node = self.find(word)?;
        node.terminal.then_some(KeywordEntry {
            languages: node.languages,
            frequency: node.frequency,
        })
    }

    /// Languages attached to `word`; empty when `word` is not indexed.
    pub fn languages(&self, word: &str) -> LanguageSet {
        self.lookup(word).map_or(LanguageSet::empty(), |e| e.languages)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Every indexed spelling that starts with `prefix`, sorted.
    pub fn with_prefix(&self, prefix: &str) -> Vec<KeywordMatch> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            let mut word = prefix.to_owned();
            collect(node, &mut word, &mut out);
        }
        out.sort_by(|a, b| a.word.cmp(&b.word));
        out
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

fn collect(node: &TrieNode, word: &mut String, out: &mut Vec<KeywordMatch>) {
    if node.terminal {
        out.push(KeywordMatch {
            word: word.clone(),
            entry: KeywordEntry {
                languages: node.languages,
                frequency: node.frequency,
            },
        });
    }
    for (&c, child) in &node.children {
        word.push(c);
        collect(child, word, out);
        word.pop();
    }
}

#[cfg(test)]
mod tests;
