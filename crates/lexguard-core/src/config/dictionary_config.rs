//! Dictionary store configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_NOTIFY_INTERVAL_MS};

/// Configuration for the word store and its change notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Entries applied between cancellation checks. Default: 1000.
    pub chunk_size: Option<usize>,
    /// Throttle window for single-item notifications. Default: 100.
    pub notify_interval_ms: Option<u64>,
    /// Notify after every mutation instead of throttling. Default: false.
    pub notify_immediately: Option<bool>,
}

impl DictionaryConfig {
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    pub fn effective_notify_interval_ms(&self) -> u64 {
        self.notify_interval_ms.unwrap_or(DEFAULT_NOTIFY_INTERVAL_MS)
    }

    pub fn effective_notify_immediately(&self) -> bool {
        self.notify_immediately.unwrap_or(false)
    }
}
