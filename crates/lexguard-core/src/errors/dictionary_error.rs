//! Dictionary store errors.

use super::error_code::{self, LexguardErrorCode};

/// Errors that can occur while mutating or bulk-loading the word store.
///
/// None of these roll back entries that were applied before the failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("word cannot be empty")]
    EmptyWord,

    #[error("invalid category: 0x{value:x}")]
    InvalidCategory { value: u32 },

    #[error("word load cancelled")]
    Cancelled,

    #[error("failed to read word list {source_name}: {message}")]
    SourceReadFailure { source_name: String, message: String },

    #[error("no default words available")]
    NoDefaultWords,
}

impl LexguardErrorCode for DictionaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyWord => error_code::EMPTY_WORD,
            Self::InvalidCategory { .. } => error_code::INVALID_CATEGORY,
            Self::Cancelled => error_code::CANCELLED,
            Self::SourceReadFailure { .. } => error_code::SOURCE_READ_FAILURE,
            Self::NoDefaultWords => error_code::CONSTRUCTION_FAILURE,
        }
    }
}
