//! # lexguard-core
//!
//! Foundation crate for the Lexguard word filter.
//! Defines the category algebra, match types, traits, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use category::{Category, CategoryRegistry};
pub use config::LexguardConfig;
pub use errors::{ConfigError, DictionaryError, EngineError, LexguardErrorCode};
pub use traits::{Cancellable, CancellationToken, WordObserver};
pub use types::{SensitiveWord, WordSnapshot};
