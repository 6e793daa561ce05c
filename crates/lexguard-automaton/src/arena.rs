//! Flat node storage shared by the trie and the Aho-Corasick automaton.

use lexguard_core::{Category, SensitiveWord};
use rustc_hash::FxHashMap;

use crate::pattern::Pattern;

/// Index of a node inside a [`NodeArena`].
pub type NodeId = u32;

/// The root node, always present at index 0.
pub const ROOT: NodeId = 0;

/// End-of-word payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub word: String,
    pub category: Category,
}

/// One prefix of one or more indexed words.
#[derive(Debug, Clone)]
pub struct Node {
    pub children: FxHashMap<char, NodeId>,
    /// Every indexed word whose key ends here, ascending by word. More than
    /// one only when distinct words share a scan key.
    pub outputs: Vec<Output>,
    /// Code points from the root.
    pub depth: u32,
    pub parent: NodeId,
    /// Longest proper suffix of this prefix that is also in the trie.
    pub fail: NodeId,
    /// Nearest node on the failure chain (excluding self) that ends a word.
    pub dict_suffix: Option<NodeId>,
}

impl Node {
    fn new(parent: NodeId, depth: u32) -> Self {
        Self {
            children: FxHashMap::default(),
            outputs: Vec::new(),
            depth,
            parent,
            fail: ROOT,
            dict_suffix: None,
        }
    }

    pub fn is_end(&self) -> bool {
        !self.outputs.is_empty()
    }
}

/// Arena of trie nodes addressed by [`NodeId`].
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
    words: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ROOT, 0)],
            words: 0,
        }
    }

    /// Drop every node except a fresh root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::new(ROOT, 0));
        self.words = 0;
    }

    /// Walk `pattern.key`, creating missing edges, and record the pattern on
    /// the terminal node. Re-inserting a word updates its category. Empty keys
    /// are skipped.
    pub fn insert(&mut self, pattern: &Pattern) {
        if pattern.key.is_empty() {
            return;
        }

        let mut current = ROOT;
        for ch in pattern.key.chars() {
            current = match self.nodes[current as usize].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len() as NodeId;
                    let depth = self.nodes[current as usize].depth + 1;
                    self.nodes.push(Node::new(current, depth));
                    self.nodes[current as usize].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current as usize];
        if node.outputs.is_empty() {
            self.words += 1;
        }
        match node
            .outputs
            .binary_search_by(|o| o.word.as_str().cmp(pattern.word.as_str()))
        {
            Ok(i) => node.outputs[i].category = pattern.category,
            Err(i) => node.outputs.insert(
                i,
                Output {
                    word: pattern.word.clone(),
                    category: pattern.category,
                },
            ),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    pub fn child(&self, id: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[id as usize].children.get(&ch).copied()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct indexed keys.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Rebuild the key spelled by the path from the root to `id`.
    #[cfg(test)]
    pub(crate) fn key_of(&self, mut id: NodeId) -> String {
        let mut chars = Vec::with_capacity(self.node(id).depth as usize);
        while id != ROOT {
            let parent = self.node(id).parent;
            if let Some((&ch, _)) = self
                .node(parent)
                .children
                .iter()
                .find(|&(_, &child)| child == id)
            {
                chars.push(ch);
            }
            id = parent;
        }
        chars.iter().rev().collect()
    }

    /// One match result per output of node `id`, whose last code point sits
    /// at `pos`. All results share the same span.
    pub(crate) fn hits(
        &self,
        id: NodeId,
        pos: usize,
    ) -> impl Iterator<Item = SensitiveWord> + '_ {
        let node = self.node(id);
        let end = pos + 1;
        let start = end - node.depth as usize;
        node.outputs.iter().map(move |output| SensitiveWord {
            word: output.word.clone(),
            start,
            end,
            category: output.category,
        })
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
