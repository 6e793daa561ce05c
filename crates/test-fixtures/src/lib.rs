//! Fixture loader for Lexguard integration tests.
//!
//! Provides the sample word lists under `wordlists/` and small helpers
//! for building dictionaries and observing store notifications.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use lexguard_core::constants::GENERAL_LIST_FILE;
use lexguard_core::{Category, WordObserver, WordSnapshot};

/// Directory holding the sample `<category>.txt` lists and `all.txt`.
pub fn wordlists_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("wordlists")
}

/// Read one sample list by file name.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn read_list(file_name: &str) -> String {
    let path = wordlists_dir().join(file_name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Every built-in category that has a sample list, with its text.
pub fn category_lists() -> Vec<(Category, String)> {
    Category::BUILTIN
        .iter()
        .filter(|(_, name)| wordlists_dir().join(format!("{name}.txt")).exists())
        .map(|(cat, name)| (*cat, read_list(&format!("{name}.txt"))))
        .collect()
}

/// The sample general list.
pub fn general_list() -> String {
    read_list(GENERAL_LIST_FILE)
}

/// Copy the sample lists into `dir`.
pub fn write_wordlists(dir: &Path) {
    for entry in std::fs::read_dir(wordlists_dir()).expect("read wordlists dir") {
        let entry = entry.expect("read wordlists entry");
        std::fs::copy(entry.path(), dir.join(entry.file_name())).expect("copy word list");
    }
}

/// Build a snapshot from literal entries.
pub fn words(entries: &[(&str, Category)]) -> WordSnapshot {
    entries.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

/// `count` distinct generated words cycling through the built-in categories.
pub fn generated_words(count: usize) -> WordSnapshot {
    (0..count)
        .map(|i| {
            let (cat, _) = Category::BUILTIN[i % Category::BUILTIN.len()];
            (format!("word{i:06}"), cat)
        })
        .collect()
}

/// Observer that keeps every snapshot it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    snapshots: Mutex<Vec<WordSnapshot>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.snapshots.lock().expect("observer lock").len()
    }

    pub fn last(&self) -> Option<WordSnapshot> {
        self.snapshots.lock().expect("observer lock").last().cloned()
    }
}

impl WordObserver for RecordingObserver {
    fn on_words_changed(&self, words: &WordSnapshot) {
        self.snapshots.lock().expect("observer lock").push(words.clone());
    }
}

/// Observer that panics on every notification.
#[derive(Debug, Default)]
pub struct PanickingObserver;

impl WordObserver for PanickingObserver {
    fn on_words_changed(&self, _words: &WordSnapshot) {
        panic!("observer failure");
    }
}
