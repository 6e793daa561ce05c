//! # lexguard-dictionary
//!
//! The canonical word → category mapping and the machinery that keeps
//! matchers in sync with it.
//!
//! - [`WordStore`]: concurrent store with validation and the NONE-preserving
//!   merge rule
//! - [`NotifyPolicy`]: when mutations are pushed to observers
//! - [`source`]: word-list text format and default list bundles

pub mod observers;
pub mod source;
pub mod store;

pub use observers::{NotifyPolicy, ObserverId};
pub use source::{parse_word_list, DefaultWordLists};
pub use store::WordStore;
