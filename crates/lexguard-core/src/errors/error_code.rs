//! LexguardErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a stable code string that
/// callers can match on without parsing display messages.
pub trait LexguardErrorCode {
    /// Returns the error code string (e.g., "EMPTY_WORD").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_WORD: &str = "EMPTY_WORD";
pub const INVALID_CATEGORY: &str = "INVALID_CATEGORY";
pub const CANCELLED: &str = "CANCELLED";
pub const SOURCE_READ_FAILURE: &str = "SOURCE_READ_FAILURE";
pub const CONSTRUCTION_FAILURE: &str = "CONSTRUCTION_FAILURE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
