//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALGORITHM, DEFAULT_REPLACEMENT_CHAR};

/// Configuration for detector and filter assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// `"aho-corasick"` or `"trie"`. Default: `"aho-corasick"`.
    pub algorithm: Option<String>,
    /// Replacement code point for masking. Default: `'*'`.
    pub replacement_char: Option<char>,
    /// Refuse to build an engine whose dictionary is empty. Default: false.
    pub require_words: Option<bool>,
}

impl EngineConfig {
    pub fn effective_algorithm(&self) -> &str {
        self.algorithm.as_deref().unwrap_or(DEFAULT_ALGORITHM)
    }

    pub fn effective_replacement_char(&self) -> char {
        self.replacement_char.unwrap_or(DEFAULT_REPLACEMENT_CHAR)
    }

    pub fn effective_require_words(&self) -> bool {
        self.require_words.unwrap_or(false)
    }
}
