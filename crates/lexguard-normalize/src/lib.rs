//! # lexguard-normalize
//!
//! Folds text into the form the automaton is built from: case, width,
//! numeral style and whitespace. Every output code point remembers which
//! input code point produced it, so hits on normalized text can be reported
//! against the caller's original text.

pub mod fold;
pub mod normalized;
pub mod preprocessor;

pub use normalized::Normalized;
pub use preprocessor::Preprocessor;
