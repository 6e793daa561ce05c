//! Aho-Corasick automaton: a trie plus failure links, scanned in one pass.

use std::collections::VecDeque;
use std::time::Instant;

use lexguard_core::SensitiveWord;

use crate::arena::{NodeArena, NodeId, ROOT};
use crate::matcher::{AlgorithmType, Matcher};
use crate::pattern::{self, Pattern};

/// Arena-backed Aho-Corasick automaton.
///
/// Every end-of-word node reachable on the failure chain of the current state
/// is a hit at the current position. `dict_suffix` links short-circuit the
/// walk over non-terminal nodes without changing which hits are reported.
#[derive(Debug, Clone, Default)]
pub struct AhoCorasick {
    arena: NodeArena,
}

impl AhoCorasick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ready automaton from `patterns`.
    pub fn from_patterns(patterns: Vec<Pattern>) -> Self {
        let mut ac = Self::new();
        ac.build_patterns(patterns);
        ac
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// BFS from the root. Parents are always finalized before their children,
    /// so a child's failure target is already linked when it is dequeued.
    fn link_failures(&mut self) {
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        let root_children: Vec<NodeId> = self.arena.node(ROOT).children.values().copied().collect();
        for child in root_children {
            let node = self.arena.node_mut(child);
            node.fail = ROOT;
            node.dict_suffix = None;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(char, NodeId)> = self
                .arena
                .node(current)
                .children
                .iter()
                .map(|(&ch, &id)| (ch, id))
                .collect();

            for (ch, child) in edges {
                queue.push_back(child);

                let mut probe = self.arena.node(current).fail;
                let target = loop {
                    if let Some(next) = self.arena.child(probe, ch) {
                        break next;
                    }
                    if probe == ROOT {
                        break ROOT;
                    }
                    probe = self.arena.node(probe).fail;
                };

                let dict_suffix = if self.arena.node(target).is_end() {
                    Some(target)
                } else {
                    self.arena.node(target).dict_suffix
                };

                let node = self.arena.node_mut(child);
                node.fail = target;
                node.dict_suffix = dict_suffix;
            }
        }
    }

    /// Advance `state` by `ch`, following failure links as needed.
    fn step(&self, mut state: NodeId, ch: char) -> NodeId {
        loop {
            if let Some(next) = self.arena.child(state, ch) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.arena.node(state).fail;
        }
    }

    /// First end-of-word node on the failure chain of `state`, inclusive.
    fn first_output(&self, state: NodeId) -> Option<NodeId> {
        let node = self.arena.node(state);
        if node.is_end() {
            Some(state)
        } else {
            node.dict_suffix
        }
    }
}

impl Matcher for AhoCorasick {
    fn algorithm_type(&self) -> AlgorithmType {
        AlgorithmType::AhoCorasick
    }

    fn build_patterns(&mut self, mut patterns: Vec<Pattern>) {
        let start = Instant::now();
        pattern::sort_for_build(&mut patterns);

        self.arena.reset();
        for p in &patterns {
            self.arena.insert(p);
        }
        self.link_failures();

        tracing::debug!(
            algorithm = "aho-corasick",
            words = self.arena.word_count(),
            nodes = self.arena.node_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "automaton rebuilt"
        );
    }

    fn for_each_hit(&self, text: &str, emit: &mut dyn FnMut(SensitiveWord) -> bool) {
        if self.arena.word_count() == 0 {
            return;
        }
        let mut state = ROOT;
        for (pos, ch) in text.chars().enumerate() {
            state = self.step(state, ch);
            let mut output = self.first_output(state);
            while let Some(id) = output {
                for hit in self.arena.hits(id, pos) {
                    if !emit(hit) {
                        return;
                    }
                }
                output = self.arena.node(id).dict_suffix;
            }
        }
    }

    fn len(&self) -> usize {
        self.arena.word_count()
    }
}
