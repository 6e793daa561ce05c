//! Build input for the matchers.

use lexguard_core::{Category, WordSnapshot};

/// One indexed word.
///
/// The trie is walked by `key`; a hit reports `word`. The two differ when the
/// caller indexes a normalized form of the dictionary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub key: String,
    pub word: String,
    pub category: Category,
}

impl Pattern {
    pub fn new(word: impl Into<String>, category: Category) -> Self {
        let word = word.into();
        Self {
            key: word.clone(),
            word,
            category,
        }
    }

    pub fn with_key(key: impl Into<String>, word: impl Into<String>, category: Category) -> Self {
        Self {
            key: key.into(),
            word: word.into(),
            category,
        }
    }
}

/// Patterns for a snapshot, keyed by the words themselves.
pub fn from_snapshot(words: &WordSnapshot) -> Vec<Pattern> {
    words
        .iter()
        .map(|(word, category)| Pattern::new(word.as_str(), *category))
        .collect()
}

/// Sort so that node layout does not depend on hash map iteration order.
pub(crate) fn sort_for_build(patterns: &mut [Pattern]) {
    patterns.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.word.cmp(&b.word)));
}
