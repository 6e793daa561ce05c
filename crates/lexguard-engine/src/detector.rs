//! Detector: preprocess, scan, map back, filter.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use lexguard_automaton::{AlgorithmType, Matcher, Pattern};
use lexguard_core::config::NormalizeConfig;
use lexguard_core::{Category, SensitiveWord, WordObserver, WordSnapshot};
use lexguard_normalize::{Normalized, Preprocessor};

use crate::query::CategoryFilter;

/// A preprocessor and the matcher built with it, published together.
#[derive(Debug)]
struct Published {
    preprocessor: Arc<Preprocessor>,
    matcher: Arc<dyn Matcher>,
}

/// Thread-safe detector over a swappable matcher.
///
/// Queries clone the published `Arc` under a short read lock and scan
/// without holding any lock. Rebuilds construct a fresh matcher off-lock and
/// swap it in under a short write lock, so a reader sees either the old or
/// the new automaton, never a partial one.
///
/// Dictionary words are indexed by their normalized form, so `"Bad"` matches
/// `"bad"` when case folding is on while hits still report `"Bad"`. Words
/// sharing a normalized form all stay indexed: a hit on that form reports the
/// word spelled exactly like the matched text, else the greatest one, and the
/// `*_in` queries choose only among words whose category passes. Hit
/// positions are code-point offsets into the text the caller passed in.
#[derive(Debug)]
pub struct Detector {
    algorithm: AlgorithmType,
    current: RwLock<Arc<Published>>,
    /// Serializes rebuilds and holds the words of the latest one.
    words: Mutex<WordSnapshot>,
}

impl Detector {
    pub fn new(algorithm: AlgorithmType, options: NormalizeConfig) -> Self {
        Self::with_preprocessor(algorithm, Preprocessor::new(options))
    }

    pub fn with_preprocessor(algorithm: AlgorithmType, preprocessor: Preprocessor) -> Self {
        let matcher: Arc<dyn Matcher> = Arc::from(algorithm.new_matcher());
        Self {
            algorithm,
            current: RwLock::new(Arc::new(Published {
                preprocessor: Arc::new(preprocessor),
                matcher,
            })),
            words: Mutex::new(WordSnapshot::new()),
        }
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.algorithm
    }

    /// Normalization options in effect.
    pub fn options(&self) -> NormalizeConfig {
        self.published().preprocessor.config().clone()
    }

    /// Number of distinct normalized keys indexed.
    pub fn len(&self) -> usize {
        self.published().matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the indexed words.
    pub fn rebuild(&self, words: &WordSnapshot) {
        let mut latest = self.words.lock().unwrap_or_else(PoisonError::into_inner);
        let preprocessor = self.published().preprocessor.clone();
        self.publish(preprocessor, words);
        *latest = words.clone();
    }

    /// Swap the normalization options and reindex the current words with them.
    pub fn set_options(&self, options: NormalizeConfig) {
        let latest = self.words.lock().unwrap_or_else(PoisonError::into_inner);
        self.publish(Arc::new(Preprocessor::new(options)), &latest);
    }

    fn publish(&self, preprocessor: Arc<Preprocessor>, words: &WordSnapshot) {
        let start = Instant::now();
        let patterns: Vec<Pattern> = words
            .iter()
            .filter_map(|(word, category)| {
                let key = preprocessor.process(word);
                (!key.is_empty()).then(|| Pattern::with_key(key, word.as_str(), *category))
            })
            .collect();

        let mut matcher = self.algorithm.new_matcher();
        matcher.build_patterns(patterns);
        let matcher: Arc<dyn Matcher> = Arc::from(matcher);
        let keys = matcher.len();

        let next = Arc::new(Published {
            preprocessor,
            matcher,
        });
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;

        tracing::debug!(
            algorithm = %self.algorithm,
            words = words.len(),
            keys,
            elapsed_us = start.elapsed().as_micros() as u64,
            "detector rebuilt"
        );
    }

    fn published(&self) -> Arc<Published> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ---- Queries ----

    pub fn detect(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let published = self.published();
        if published.matcher.is_empty() {
            return false;
        }
        let normalized = published.preprocessor.process(text);
        published.matcher.detect(&normalized)
    }

    pub fn detect_in(&self, text: &str, categories: &[Category]) -> bool {
        self.match_in(text, categories).is_some()
    }

    /// First hit in scan order: earliest end, longest at that end.
    pub fn match_first(&self, text: &str) -> Option<SensitiveWord> {
        let mut first = None;
        self.for_each_key(text, None, |hit| {
            first = Some(hit);
            false
        });
        first
    }

    /// First hit in scan order whose category passes the filter.
    pub fn match_in(&self, text: &str, categories: &[Category]) -> Option<SensitiveWord> {
        let filter = CategoryFilter::new(categories);
        if filter.is_empty() {
            return None;
        }
        let mut first = None;
        self.for_each_key(text, Some(&filter), |hit| {
            first = Some(hit);
            false
        });
        first
    }

    /// Every hit, ordered by ascending start. Hits sharing a start keep scan
    /// order.
    pub fn match_all(&self, text: &str) -> Vec<SensitiveWord> {
        self.collect(text, None)
    }

    /// Every hit whose category passes the filter, ordered like `match_all`.
    pub fn match_all_in(&self, text: &str, categories: &[Category]) -> Vec<SensitiveWord> {
        let filter = CategoryFilter::new(categories);
        if filter.is_empty() {
            return Vec::new();
        }
        self.collect(text, Some(&filter))
    }

    fn collect(&self, text: &str, filter: Option<&CategoryFilter>) -> Vec<SensitiveWord> {
        let mut hits = Vec::new();
        self.for_each_key(text, filter, |hit| {
            hits.push(hit);
            true
        });
        hits.sort_by_key(|hit| hit.start);
        hits
    }

    /// Resolve the matcher's hits one matched key at a time, in scan order.
    /// `visit` gets one hit per key occurrence, already in original
    /// positions, and returns `false` to stop.
    fn for_each_key(
        &self,
        text: &str,
        filter: Option<&CategoryFilter>,
        mut visit: impl FnMut(SensitiveWord) -> bool,
    ) {
        let Some((normalized, published)) = self.prepare(text) else {
            return;
        };

        let mut group: Vec<SensitiveWord> = Vec::new();
        let mut stopped = false;
        published.matcher.for_each_hit(normalized.text(), &mut |hit: SensitiveWord| {
            let next_key = group
                .first()
                .is_some_and(|g| (g.start, g.end) != (hit.start, hit.end));
            if next_key {
                let taken = std::mem::take(&mut group);
                if let Some(resolved) = resolve(text, &normalized, taken, filter) {
                    if !visit(resolved) {
                        stopped = true;
                        return false;
                    }
                }
            }
            group.push(hit);
            true
        });

        if !stopped {
            if let Some(resolved) = resolve(text, &normalized, group, filter) {
                visit(resolved);
            }
        }
    }

    fn prepare(&self, text: &str) -> Option<(Normalized, Arc<Published>)> {
        if text.is_empty() {
            return None;
        }
        let published = self.published();
        if published.matcher.is_empty() {
            return None;
        }
        let normalized = published.preprocessor.process_with_offsets(text);
        Some((normalized, published))
    }
}

impl WordObserver for Detector {
    fn on_words_changed(&self, words: &WordSnapshot) {
        self.rebuild(words);
    }
}

/// Pick one hit among the words of a single matched key. `group` holds them
/// in ascending word order, all on the same span.
fn resolve(
    text: &str,
    normalized: &Normalized,
    group: Vec<SensitiveWord>,
    filter: Option<&CategoryFilter>,
) -> Option<SensitiveWord> {
    let mut candidates: Vec<SensitiveWord> = group
        .into_iter()
        .filter(|hit| filter.map_or(true, |f| f.accepts(hit.category)))
        .map(|hit| to_original(normalized, hit))
        .collect();

    if candidates.len() > 1 {
        let (start, end) = (candidates[0].start, candidates[0].end);
        let matched: String = text.chars().skip(start).take(end - start).collect();
        if let Some(i) = candidates.iter().position(|hit| hit.word == matched) {
            return Some(candidates.swap_remove(i));
        }
    }
    candidates.pop()
}

fn to_original(normalized: &Normalized, hit: SensitiveWord) -> SensitiveWord {
    let (start, end) = normalized.original_span(hit.start, hit.end);
    SensitiveWord { start, end, ..hit }
}
