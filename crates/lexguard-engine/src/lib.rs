//! # lexguard-engine
//!
//! Query-side assembly of the word filter.
//!
//! - [`Detector`]: normalizes text, scans it with the current matcher and
//!   maps hits back to the caller's text
//! - [`Filter`]: rewrites text from a detector's hits
//! - [`Lexguard`]: owns a store, a detector and a filter and keeps them wired

pub mod detector;
pub mod engine;
pub mod filter;
pub mod query;

pub use detector::Detector;
pub use engine::{Lexguard, LexguardBuilder};
pub use filter::Filter;
pub use query::CategoryFilter;
