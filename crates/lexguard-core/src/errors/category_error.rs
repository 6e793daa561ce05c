//! Category registry errors.

use super::error_code::{self, LexguardErrorCode};

/// Errors raised while registering runtime categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("no free category bit left to register {name}")]
    Exhausted { name: String },
}

impl LexguardErrorCode for CategoryError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CATEGORY
    }
}
