//! Error handling for Lexguard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod category_error;
pub mod config_error;
pub mod dictionary_error;
pub mod engine_error;
pub mod error_code;

pub use category_error::CategoryError;
pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use engine_error::EngineError;
pub use error_code::LexguardErrorCode;
