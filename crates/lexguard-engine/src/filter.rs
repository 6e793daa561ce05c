//! Filter: rewrites text from a detector's hits.

use std::sync::Arc;

use lexguard_core::constants::DEFAULT_REPLACEMENT_CHAR;
use lexguard_core::{Category, SensitiveWord};

use crate::detector::Detector;

/// Text rewriter over a shared [`Detector`].
#[derive(Debug, Clone)]
pub struct Filter {
    detector: Arc<Detector>,
    replacement: char,
}

impl Filter {
    pub fn new(detector: Arc<Detector>) -> Self {
        Self::with_replacement(detector, DEFAULT_REPLACEMENT_CHAR)
    }

    /// Filter whose `mask` methods use `replacement`.
    pub fn with_replacement(detector: Arc<Detector>, replacement: char) -> Self {
        Self {
            detector,
            replacement,
        }
    }

    pub fn detector(&self) -> &Arc<Detector> {
        &self.detector
    }

    pub fn replacement(&self) -> char {
        self.replacement
    }

    /// Replace every hit with `ch` repeated over the hit's span.
    pub fn replace(&self, text: &str, ch: char) -> String {
        self.replace_with_strategy(text, repeat(ch))
    }

    pub fn replace_in(&self, text: &str, ch: char, categories: &[Category]) -> String {
        self.replace_with_strategy_in(text, repeat(ch), categories)
    }

    pub fn replace_with_asterisk(&self, text: &str) -> String {
        self.replace(text, '*')
    }

    pub fn replace_with_asterisk_in(&self, text: &str, categories: &[Category]) -> String {
        self.replace_in(text, '*', categories)
    }

    /// Replace every hit with the configured replacement character.
    pub fn mask(&self, text: &str) -> String {
        self.replace(text, self.replacement)
    }

    pub fn mask_in(&self, text: &str, categories: &[Category]) -> String {
        self.replace_in(text, self.replacement, categories)
    }

    /// Replace every hit with whatever `strategy` returns for it.
    ///
    /// `strategy` is not called for a hit nested entirely inside text an
    /// earlier hit already replaced, so it may see fewer hits than
    /// `match_all` returns.
    pub fn replace_with_strategy<F>(&self, text: &str, strategy: F) -> String
    where
        F: Fn(&SensitiveWord) -> String,
    {
        if text.is_empty() {
            return String::new();
        }
        splice(text, &self.detector.match_all(text), strategy)
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
        if text.is_empty() || categories.is_empty() {
            return text.to_string();
        }
        splice(text, &self.detector.match_all_in(text, categories), strategy)
    }
}

/// Strategy repeating `ch` once per code point of the hit's span.
pub fn repeat(ch: char) -> impl Fn(&SensitiveWord) -> String {
    move |hit| std::iter::repeat(ch).take(hit.len()).collect()
}

/// Rebuild `text` with every hit replaced, in one forward pass.
///
/// `hits` must be sorted by ascending start and use code-point offsets into
/// `text`. A hit that starts before the cursor only contributes the part of
/// its replacement past the already consumed prefix; a hit fully inside
/// consumed text is skipped without calling `strategy`.
pub fn splice<F>(text: &str, hits: &[SensitiveWord], strategy: F) -> String
where
    F: Fn(&SensitiveWord) -> String,
{
    if hits.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for hit in hits {
        let end = hit.end.min(chars.len());
        if end <= cursor {
            continue;
        }
        let start = hit.start.min(end);
        if start >= cursor {
            out.extend(&chars[cursor..start]);
            out.push_str(&strategy(hit));
        } else {
            out.extend(strategy(hit).chars().skip(cursor - start));
        }
        cursor = end;
    }

    out.extend(&chars[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(start: usize, end: usize) -> SensitiveWord {
        SensitiveWord {
            word: String::new(),
            start,
            end,
            category: Category::NONE,
        }
    }

    #[test]
    fn splice_without_hits_is_identity() {
        assert_eq!(splice("abc", &[], repeat('*')), "abc");
    }

    #[test]
    fn splice_adjacent() {
        assert_eq!(splice("abcdef", &[hit(0, 2), hit(2, 4)], repeat('*')), "****ef");
    }

    #[test]
    fn splice_overlap_keeps_length_with_default_strategy() {
        assert_eq!(splice("abcdef", &[hit(1, 4), hit(2, 5)], repeat('#')), "a####f");
    }

    #[test]
    fn splice_nested_hit_is_absorbed() {
        assert_eq!(splice("abcdef", &[hit(0, 5), hit(1, 3)], repeat('*')), "*****f");
    }

    #[test]
    fn splice_skips_strategy_for_nested_hits() {
        let calls = std::cell::Cell::new(0);
        let out = splice("abcdef", &[hit(0, 5), hit(1, 3), hit(4, 6)], |h| {
            calls.set(calls.get() + 1);
            "*".repeat(h.len())
        });
        assert_eq!(out, "******");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn splice_variable_length() {
        let out = splice("say bad now", &[hit(4, 7)], |_| "[x]".to_string());
        assert_eq!(out, "say [x] now");
        let out = splice("say bad now", &[hit(4, 7)], |_| String::new());
        assert_eq!(out, "say  now");
    }
}
