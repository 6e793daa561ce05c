//! Word-list source format and default list bundles.
//!
//! A word list is line-oriented UTF-8: one word per line, surrounding
//! whitespace trimmed, blank lines and `#` comments skipped.

use std::path::Path;

use lexguard_core::constants::GENERAL_LIST_FILE;
use lexguard_core::{Category, CategoryRegistry, DictionaryError};

/// The word carried by one source line, if any.
pub(crate) fn clean_line(line: &str) -> Option<&str> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        None
    } else {
        Some(word)
    }
}

/// Iterate the words of a word-list blob.
pub fn parse_word_list(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.lines().filter_map(clean_line)
}

/// Default word lists: one blob per category plus an optional general list
/// whose words carry [`Category::NONE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultWordLists {
    lists: Vec<(Category, String)>,
    general: Option<String>,
}

impl DefaultWordLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category list.
    pub fn with_list(mut self, category: Category, text: impl Into<String>) -> Self {
        self.push(category, text);
        self
    }

    /// Set the general list.
    pub fn with_general(mut self, text: impl Into<String>) -> Self {
        self.general = Some(text.into());
        self
    }

    pub fn push(&mut self, category: Category, text: impl Into<String>) {
        self.lists.push((category, text.into()));
    }

    pub fn lists(&self) -> &[(Category, String)] {
        &self.lists
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    /// True when the bundle carries no list at all.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty() && self.general.is_none()
    }

    /// Read `<category-name>.txt` for every tag in `registry` plus
    /// `all.txt` from `dir`. Missing files are skipped.
    pub fn from_dir(dir: &Path, registry: &CategoryRegistry) -> Result<Self, DictionaryError> {
        if !dir.is_dir() {
            return Err(DictionaryError::SourceReadFailure {
                source_name: dir.display().to_string(),
                message: "not a directory".to_string(),
            });
        }

        let mut bundle = Self::new();
        for (category, name) in registry.primitives() {
            if let Some(text) = read_optional(&dir.join(format!("{name}.txt")))? {
                bundle.push(category, text);
            }
        }
        bundle.general = read_optional(&dir.join(GENERAL_LIST_FILE))?;

        tracing::debug!(
            dir = %dir.display(),
            lists = bundle.lists.len(),
            general = bundle.general.is_some(),
            "default word lists read"
        );
        Ok(bundle)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, DictionaryError> {
    if !path.is_file() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| DictionaryError::SourceReadFailure {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_are_skipped() {
        let words: Vec<&str> = parse_word_list("# header\n\n  bad  \r\n#x\nworse\n").collect();
        assert_eq!(words, vec!["bad", "worse"]);
    }

    #[test]
    fn empty_bundle() {
        assert!(DefaultWordLists::new().is_empty());
        assert!(!DefaultWordLists::new().with_general("").is_empty());
    }
}
