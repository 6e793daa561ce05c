//! Naive prefix-trie matcher.

use std::time::Instant;

use lexguard_core::SensitiveWord;

use crate::arena::{NodeArena, NodeId, ROOT};
use crate::matcher::{AlgorithmType, Matcher};
use crate::pattern::{self, Pattern};

/// Restarts a trie walk at every start position and reports the first end
/// node reached, i.e. the shortest key starting there.
///
/// `match_all` reports at most one key per start position.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    arena: NodeArena,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_patterns(patterns: Vec<Pattern>) -> Self {
        let mut trie = Self::new();
        trie.build_patterns(patterns);
        trie
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Shortest key starting at `start`: its end node and last position.
    fn match_at(&self, chars: &[char], start: usize) -> Option<(NodeId, usize)> {
        let mut node = ROOT;
        for (offset, &ch) in chars[start..].iter().enumerate() {
            node = self.arena.child(node, ch)?;
            if self.arena.node(node).is_end() {
                return Some((node, start + offset));
            }
        }
        None
    }
}

impl Matcher for Trie {
    fn algorithm_type(&self) -> AlgorithmType {
        AlgorithmType::Trie
    }

    fn build_patterns(&mut self, mut patterns: Vec<Pattern>) {
        let start = Instant::now();
        pattern::sort_for_build(&mut patterns);

        self.arena.reset();
        for p in &patterns {
            self.arena.insert(p);
        }

        tracing::debug!(
            algorithm = "trie",
            words = self.arena.word_count(),
            nodes = self.arena.node_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "trie rebuilt"
        );
    }

    fn for_each_hit(&self, text: &str, emit: &mut dyn FnMut(SensitiveWord) -> bool) {
        if self.arena.word_count() == 0 {
            return;
        }
        let chars: Vec<char> = text.chars().collect();
        for start in 0..chars.len() {
            let Some((node, pos)) = self.match_at(&chars, start) else {
                continue;
            };
            for hit in self.arena.hits(node, pos) {
                if !emit(hit) {
                    return;
                }
            }
        }
    }

    fn len(&self) -> usize {
        self.arena.word_count()
    }
}
