//! Shared constants for the Lexguard word filter.

/// Lexguard version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entries processed between cancellation checks during bulk loads.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Minimum interval between notifications caused by single-item mutations.
pub const DEFAULT_NOTIFY_INTERVAL_MS: u64 = 100;

/// Default replacement code point for masking.
pub const DEFAULT_REPLACEMENT_CHAR: char = '*';

/// Default matching algorithm name.
pub const DEFAULT_ALGORITHM: &str = "aho-corasick";

/// Names accepted for `engine.algorithm`.
pub const SUPPORTED_ALGORITHMS: [&str; 2] = ["aho-corasick", "trie"];

/// File name of the general (uncategorized) default word list.
pub const GENERAL_LIST_FILE: &str = "all.txt";

/// Project config file name looked up in the config root.
pub const CONFIG_FILE_NAME: &str = "lexguard.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "LEXGUARD_LOG";
