//! The `Matcher` abstraction and algorithm selection.

use std::fmt;
use std::str::FromStr;

use lexguard_core::constants::SUPPORTED_ALGORITHMS;
use lexguard_core::{ConfigError, SensitiveWord, WordSnapshot};

use crate::aho_corasick::AhoCorasick;
use crate::pattern::{self, Pattern};
use crate::trie::Trie;

/// A multi-word matcher over code points.
///
/// Positions in results are code-point offsets into the scanned text. When
/// several words share a scan key, a match of that key yields one hit per
/// word, consecutively and in ascending word order.
/// Implementations are immutable after `build`, so a built matcher can be
/// shared across threads behind an `Arc`.
pub trait Matcher: Send + Sync + fmt::Debug {
    fn algorithm_type(&self) -> AlgorithmType;

    /// Replace all content with `patterns`.
    fn build_patterns(&mut self, patterns: Vec<Pattern>);

    /// Replace all content with the words of a dictionary snapshot.
    fn build(&mut self, words: &WordSnapshot) {
        self.build_patterns(pattern::from_snapshot(words));
    }

    fn detect(&self, text: &str) -> bool {
        self.match_first(text).is_some()
    }

    /// Call `emit` for every hit in scan order. Stops early when `emit`
    /// returns `false`.
    fn for_each_hit(&self, text: &str, emit: &mut dyn FnMut(SensitiveWord) -> bool);

    fn match_first(&self, text: &str) -> Option<SensitiveWord> {
        let mut first = None;
        self.for_each_hit(text, &mut |hit: SensitiveWord| {
            first = Some(hit);
            false
        });
        first
    }

    fn match_all(&self, text: &str) -> Vec<SensitiveWord> {
        let mut hits = Vec::new();
        self.for_each_hit(text, &mut |hit: SensitiveWord| {
            hits.push(hit);
            true
        });
        hits
    }

    /// Number of distinct indexed keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which matcher implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlgorithmType {
    /// Restart a trie walk at every position.
    Trie,
    /// Single pass with failure links.
    #[default]
    AhoCorasick,
}

impl AlgorithmType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Trie => "trie",
            Self::AhoCorasick => "aho-corasick",
        }
    }

    /// An empty matcher of this type.
    pub fn new_matcher(self) -> Box<dyn Matcher> {
        match self {
            Self::Trie => Box::new(Trie::new()),
            Self::AhoCorasick => Box::new(AhoCorasick::new()),
        }
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trie" => Ok(Self::Trie),
            "aho-corasick" | "ahocorasick" | "ac" => Ok(Self::AhoCorasick),
            other => Err(ConfigError::ValidationFailed {
                field: "engine.algorithm".to_string(),
                message: format!(
                    "unknown algorithm '{other}', expected one of {SUPPORTED_ALGORITHMS:?}"
                ),
            }),
        }
    }
}
