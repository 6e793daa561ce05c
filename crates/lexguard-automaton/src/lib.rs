//! # lexguard-automaton
//!
//! Multi-word matching over code points.
//!
//! Nodes live in a flat arena and refer to each other by index, so the
//! failure links of the Aho-Corasick automaton never form ownership cycles.
//! Both matchers are rebuilt from scratch on every dictionary change.

pub mod aho_corasick;
pub mod arena;
pub mod matcher;
pub mod pattern;
pub mod trie;

pub use aho_corasick::AhoCorasick;
pub use arena::{NodeArena, NodeId, ROOT};
pub use matcher::{AlgorithmType, Matcher};
pub use pattern::Pattern;
pub use trie::Trie;
