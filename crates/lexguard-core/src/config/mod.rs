//! Configuration system for Lexguard.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod dictionary_config;
pub mod engine_config;
pub mod lexguard_config;
pub mod normalize_config;

pub use dictionary_config::DictionaryConfig;
pub use engine_config::EngineConfig;
pub use lexguard_config::{ConfigOverrides, LexguardConfig};
pub use normalize_config::NormalizeConfig;
