//! WordStore: the canonical word → category mapping.

use std::io::BufRead;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use lexguard_core::config::DictionaryConfig;
use lexguard_core::{
    Cancellable, Category, CategoryRegistry, DictionaryError, WordObserver, WordSnapshot,
};

use crate::observers::{NotifyPolicy, ObserverId, Observers};
use crate::source::{clean_line, parse_word_list, DefaultWordLists};

/// Concurrent word store.
///
/// Words are trimmed before storage and never empty. Re-inserting a word
/// with [`Category::NONE`] keeps an existing non-NONE category; any other
/// category overwrites. Every mutation that may have changed content is
/// followed by a snapshot notification according to the [`NotifyPolicy`].
///
/// Batch operations are not transactional: a failing entry aborts the batch
/// but keeps everything applied before it.
#[derive(Debug)]
pub struct WordStore {
    words: DashMap<String, Category>,
    registry: Arc<CategoryRegistry>,
    observers: Observers,
    chunk_size: usize,
}

impl WordStore {
    /// Store with default settings and the built-in categories.
    pub fn new() -> Self {
        Self::with_config(&DictionaryConfig::default(), Arc::new(CategoryRegistry::new()))
    }

    pub fn with_config(config: &DictionaryConfig, registry: Arc<CategoryRegistry>) -> Self {
        Self {
            words: DashMap::new(),
            registry,
            observers: Observers::new(NotifyPolicy::from_config(config)),
            chunk_size: config.effective_chunk_size().max(1),
        }
    }

    /// Store with an explicit notification policy.
    pub fn with_policy(policy: NotifyPolicy) -> Self {
        Self {
            words: DashMap::new(),
            registry: Arc::new(CategoryRegistry::new()),
            observers: Observers::new(policy),
            chunk_size: DictionaryConfig::default().effective_chunk_size(),
        }
    }

    pub fn registry(&self) -> &Arc<CategoryRegistry> {
        &self.registry
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.observers.policy()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    // ---- Single-item mutation ----

    /// Add or update one word.
    pub fn add_word(&self, word: &str, category: Category) -> Result<(), DictionaryError> {
        self.insert(word, category)?;
        self.observers.notify_single(|| self.get_words());
        Ok(())
    }

    /// Remove one word. Returns whether it was present.
    pub fn remove_word(&self, word: &str) -> bool {
        let removed = self.words.remove(word.trim()).is_some();
        self.observers.notify_single(|| self.get_words());
        removed
    }

    // ---- Batch mutation ----

    /// Add a batch of words. The first invalid entry aborts the batch.
    pub fn add_words<I, S>(&self, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator<Item = (S, Category)>,
        S: AsRef<str>,
    {
        let result = words
            .into_iter()
            .try_for_each(|(word, category)| self.insert(word.as_ref(), category));
        self.observers.notify(|| self.get_words());
        result
    }

    /// Remove a batch of words. Returns how many were present.
    pub fn remove_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed = words
            .into_iter()
            .filter(|word| self.words.remove(word.as_ref().trim()).is_some())
            .count();
        self.observers.notify(|| self.get_words());
        removed
    }

    pub fn clear(&self) {
        self.words.clear();
        self.observers.notify(|| self.get_words());
    }

    // ---- Bulk loads ----

    /// Bulk-load a word map, checking `cancel` before every chunk.
    /// Returns the number of entries applied.
    pub fn load_custom_words(
        &self,
        words: &WordSnapshot,
        cancel: &dyn Cancellable,
    ) -> Result<usize, DictionaryError> {
        self.bulk("custom", cancel, |load| {
            words
                .iter()
                .try_for_each(|(word, category)| load.apply(word, *category))
        })
    }

    /// Bulk-load a word-list blob with one category for every word.
    pub fn load_source(
        &self,
        source: &str,
        category: Category,
        cancel: &dyn Cancellable,
    ) -> Result<usize, DictionaryError> {
        self.bulk("source", cancel, |load| {
            parse_word_list(source).try_for_each(|word| load.apply(word, category))
        })
    }

    /// Bulk-load a word list from a reader. I/O errors surface as
    /// [`DictionaryError::SourceReadFailure`] tagged with `source_name`.
    pub fn load_reader<R: BufRead>(
        &self,
        source_name: &str,
        reader: R,
        category: Category,
        cancel: &dyn Cancellable,
    ) -> Result<usize, DictionaryError> {
        self.bulk(source_name, cancel, |load| {
            for line in reader.lines() {
                let line = line.map_err(|e| DictionaryError::SourceReadFailure {
                    source_name: source_name.to_string(),
                    message: e.to_string(),
                })?;
                if let Some(word) = clean_line(&line) {
                    load.apply(word, category)?;
                }
            }
            Ok(())
        })
    }

    /// Load every list of a default bundle, general list last.
    pub fn load_default_words(
        &self,
        lists: &DefaultWordLists,
        cancel: &dyn Cancellable,
    ) -> Result<usize, DictionaryError> {
        if lists.is_empty() {
            return Err(DictionaryError::NoDefaultWords);
        }

        self.bulk("defaults", cancel, |load| {
            let general = lists.general().map(|text| (Category::NONE, text));
            let all = lists
                .lists()
                .iter()
                .map(|(category, text)| (*category, text.as_str()))
                .chain(general);
            for (category, text) in all {
                load.check()?;
                for word in parse_word_list(text) {
                    load.apply(word, category)?;
                }
            }
            Ok(())
        })
    }

    /// Run a bulk load and always notify afterwards, even on error, since
    /// earlier entries stay applied.
    fn bulk(
        &self,
        source_name: &str,
        cancel: &dyn Cancellable,
        run: impl FnOnce(&mut BulkLoad<'_>) -> Result<(), DictionaryError>,
    ) -> Result<usize, DictionaryError> {
        let mut load = BulkLoad {
            store: self,
            cancel,
            applied: 0,
        };
        let result = run(&mut load);
        let applied = load.applied;

        match &result {
            Ok(()) => tracing::info!(source = source_name, applied, "word list loaded"),
            Err(DictionaryError::Cancelled) => {
                tracing::warn!(source = source_name, applied, "word list load cancelled")
            }
            Err(e) => tracing::warn!(source = source_name, applied, error = %e, "word list load failed"),
        }

        self.observers.notify(|| self.get_words());
        result.map(|()| applied)
    }

    // ---- Queries ----

    /// Copy of the whole mapping.
    pub fn get_words(&self) -> WordSnapshot {
        self.words
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word.trim())
    }

    pub fn category_of(&self, word: &str) -> Option<Category> {
        self.words.get(word.trim()).map(|entry| *entry.value())
    }

    // ---- Observers ----

    pub fn add_observer(&self, observer: Arc<dyn WordObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Push the current content to every observer regardless of policy.
    pub fn flush(&self) {
        self.observers.notify(|| self.get_words());
    }

    /// Publish a throttled single-item change once its interval has passed.
    /// Returns whether observers were notified.
    pub fn flush_if_due(&self) -> bool {
        self.observers.notify_if_due(|| self.get_words())
    }

    /// True when a single-item change has not reached observers yet.
    pub fn has_pending(&self) -> bool {
        self.observers.has_pending()
    }

    /// Validate and apply one entry without notifying.
    fn insert(&self, word: &str, category: Category) -> Result<(), DictionaryError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }
        if !self.registry.is_valid(category) {
            return Err(DictionaryError::InvalidCategory {
                value: category.bits(),
            });
        }

        match self.words.entry(word.to_string()) {
            Entry::Occupied(mut existing) => {
                if !(category.is_none() && !existing.get().is_none()) {
                    existing.insert(category);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(category);
            }
        }
        Ok(())
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one running bulk load.
struct BulkLoad<'a> {
    store: &'a WordStore,
    cancel: &'a dyn Cancellable,
    applied: usize,
}

impl BulkLoad<'_> {
    fn check(&self) -> Result<(), DictionaryError> {
        if self.cancel.is_cancelled() {
            Err(DictionaryError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Apply one entry, checking cancellation at every chunk boundary.
    fn apply(&mut self, word: &str, category: Category) -> Result<(), DictionaryError> {
        if self.applied % self.store.chunk_size == 0 {
            self.check()?;
        }
        self.store.insert(word, category)?;
        self.applied += 1;
        Ok(())
    }
}
