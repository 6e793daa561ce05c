//! Value types shared across the workspace.

pub mod sensitive_word;

use std::collections::HashMap;

use crate::category::Category;

pub use sensitive_word::SensitiveWord;

/// Full word → category mapping, used as bulk-load input and as the payload
/// delivered to observers on change.
pub type WordSnapshot = HashMap<String, Category>;
