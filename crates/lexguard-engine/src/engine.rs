//! Lexguard: the assembled word filter.

use std::sync::Arc;

use lexguard_automaton::AlgorithmType;
use lexguard_core::config::NormalizeConfig;
use lexguard_core::{
    Cancellable, CancellationToken, Category, CategoryRegistry, DictionaryError, EngineError,
    LexguardConfig, SensitiveWord, WordSnapshot,
};
use lexguard_dictionary::{DefaultWordLists, ObserverId, WordStore};

use crate::detector::Detector;
use crate::filter::Filter;

/// Word store, detector and filter wired together.
///
/// The detector observes the store, so every published store change
/// rebuilds the automaton. With the default throttled policy, single-word
/// changes made in quick succession may need a [`flush`](Self::flush)
/// before they are visible to queries.
#[derive(Debug)]
pub struct Lexguard {
    config: LexguardConfig,
    store: Arc<WordStore>,
    detector: Arc<Detector>,
    filter: Filter,
    observer: ObserverId,
}

impl Lexguard {
    pub fn builder() -> LexguardBuilder {
        LexguardBuilder::default()
    }

    /// Engine preloaded with `lists` that refuses to start with an empty
    /// dictionary.
    pub fn with_defaults(lists: DefaultWordLists) -> Result<Self, EngineError> {
        Self::builder()
            .default_words(lists)
            .require_words(true)
            .build()
    }

    pub fn config(&self) -> &LexguardConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<WordStore> {
        &self.store
    }

    pub fn detector(&self) -> &Arc<Detector> {
        &self.detector
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn registry(&self) -> &Arc<CategoryRegistry> {
        self.store.registry()
    }

    /// Swap normalization options and reindex the dictionary with them.
    pub fn set_options(&mut self, options: NormalizeConfig) {
        self.config.normalize = options.clone();
        self.detector.set_options(options);
    }

    // ---- Detection ----

    pub fn detect(&self, text: &str) -> bool {
        self.catch_up();
        self.detector.detect(text)
    }

    pub fn detect_in(&self, text: &str, categories: &[Category]) -> bool {
        self.catch_up();
        self.detector.detect_in(text, categories)
    }

    pub fn match_first(&self, text: &str) -> Option<SensitiveWord> {
        self.catch_up();
        self.detector.match_first(text)
    }

    pub fn match_in(&self, text: &str, categories: &[Category]) -> Option<SensitiveWord> {
        self.catch_up();
        self.detector.match_in(text, categories)
    }

    pub fn match_all(&self, text: &str) -> Vec<SensitiveWord> {
        self.catch_up();
        self.detector.match_all(text)
    }

    pub fn match_all_in(&self, text: &str, categories: &[Category]) -> Vec<SensitiveWord> {
        self.catch_up();
        self.detector.match_all_in(text, categories)
    }

    // ---- Filtering ----

    pub fn replace(&self, text: &str, ch: char) -> String {
        self.catch_up();
        self.filter.replace(text, ch)
    }

    pub fn replace_in(&self, text: &str, ch: char, categories: &[Category]) -> String {
        self.catch_up();
        self.filter.replace_in(text, ch, categories)
    }

    pub fn replace_with_asterisk(&self, text: &str) -> String {
        self.catch_up();
        self.filter.replace_with_asterisk(text)
    }

    pub fn replace_with_asterisk_in(&self, text: &str, categories: &[Category]) -> String {
        self.catch_up();
        self.filter.replace_with_asterisk_in(text, categories)
    }

    /// Mask hits with `engine.replacement_char`.
    pub fn mask(&self, text: &str) -> String {
        self.catch_up();
        self.filter.mask(text)
    }

    /// Replace hits with `strategy`'s output. Hits nested inside an already
    /// replaced span never reach `strategy`.
    pub fn replace_with_strategy<F>(&self, text: &str, strategy: F) -> String
    where
        F: Fn(&SensitiveWord) -> String,
    {
        self.catch_up();
        self.filter.replace_with_strategy(text, strategy)
    }

    pub fn replace_with_strategy_in<F>(
        &self,
        text: &str,
        strategy: F,
        categories: &[Category],
    ) -> String
    where
        F: Fn(&SensitiveWord) -> String,
    {
        self.catch_up();
        self.filter
            .replace_with_strategy_in(text, strategy, categories)
    }

    // ---- Dictionary ----

    pub fn add_word(&self, word: &str, category: Category) -> Result<(), DictionaryError> {
        self.store.add_word(word, category)
    }

    pub fn add_words<I, S>(&self, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator<Item = (S, Category)>,
        S: AsRef<str>,
    {
        self.store.add_words(words)
    }

    pub fn remove_word(&self, word: &str) -> bool {
        self.store.remove_word(word)
    }

    pub fn remove_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.remove_words(words)
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn load_default_words(
        &self,
        lists: &DefaultWordLists,
        cancel: &dyn Cancellable,
    ) -> Result<usize, DictionaryError> {
        self.store.load_default_words(lists, cancel)
    }

    pub fn load_custom_words(
        &self,
        words: &WordSnapshot,
        cancel: &dyn Cancellable,
    ) -> Result<usize, DictionaryError> {
        self.store.load_custom_words(words, cancel)
    }

    pub fn get_words(&self) -> WordSnapshot {
        self.store.get_words()
    }

    pub fn word_count(&self) -> usize {
        self.store.len()
    }

    /// Publish pending throttled changes to the detector.
    pub fn flush(&self) {
        self.store.flush();
    }

    /// Deliver a throttled change whose interval has passed, so queries never
    /// run against a dictionary older than one throttle interval.
    fn catch_up(&self) {
        if self.store.flush_if_due() {
            tracing::debug!("published pending dictionary change before query");
        }
    }
}

impl Drop for Lexguard {
    fn drop(&mut self) {
        self.store.remove_observer(self.observer);
    }
}

/// Builder for [`Lexguard`].
#[derive(Debug, Default)]
pub struct LexguardBuilder {
    config: Option<LexguardConfig>,
    default_words: Option<DefaultWordLists>,
    custom_words: Option<WordSnapshot>,
    registry: Option<CategoryRegistry>,
    require_words: Option<bool>,
}

impl LexguardBuilder {
    pub fn config(mut self, config: LexguardConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn default_words(mut self, lists: DefaultWordLists) -> Self {
        self.default_words = Some(lists);
        self
    }

    pub fn custom_words(mut self, words: WordSnapshot) -> Self {
        self.custom_words = Some(words);
        self
    }

    /// Category registry to validate words against. Defaults to the
    /// built-in tags.
    pub fn registry(mut self, registry: CategoryRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Override `engine.require_words`.
    pub fn require_words(mut self, require: bool) -> Self {
        self.require_words = Some(require);
        self
    }

    pub fn build(self) -> Result<Lexguard, EngineError> {
        let config = self.config.unwrap_or_default();
        LexguardConfig::validate(&config)?;
        let algorithm: AlgorithmType = config.engine.effective_algorithm().parse()?;
        let require_words = self
            .require_words
            .unwrap_or_else(|| config.engine.effective_require_words());

        let registry = Arc::new(self.registry.unwrap_or_default());
        let store = Arc::new(WordStore::with_config(&config.dictionary, registry));
        let detector = Arc::new(Detector::new(algorithm, config.normalize.clone()));
        let observer = store.add_observer(detector.clone());

        let cancel = CancellationToken::new();
        if let Some(lists) = &self.default_words {
            store.load_default_words(lists, &cancel)?;
        }
        if let Some(words) = &self.custom_words {
            store.load_custom_words(words, &cancel)?;
        }

        if require_words && store.is_empty() {
            store.remove_observer(observer);
            return Err(EngineError::construction("dictionary", "no words loaded"));
        }

        let filter = Filter::with_replacement(
            detector.clone(),
            config.engine.effective_replacement_char(),
        );

        tracing::info!(
            algorithm = %algorithm,
            words = store.len(),
            observers = store.observer_count(),
            "lexguard engine ready"
        );

        Ok(Lexguard {
            config,
            store,
            detector,
            filter,
            observer,
        })
    }
}
