//! Engine construction errors.

use super::error_code::{self, LexguardErrorCode};
use super::{ConfigError, DictionaryError};

/// Errors surfaced while assembling an engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("failed to construct {component}: {reason}")]
    ConstructionFailure { component: String, reason: String },

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub fn construction(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConstructionFailure {
            component: component.into(),
            reason: reason.into(),
        }
    }
}

impl LexguardErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConstructionFailure { .. } => error_code::CONSTRUCTION_FAILURE,
            Self::Dictionary(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
