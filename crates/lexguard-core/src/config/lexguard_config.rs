//! Top-level Lexguard configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DictionaryConfig, EngineConfig, NormalizeConfig};
use crate::constants::{CONFIG_FILE_NAME, SUPPORTED_ALGORITHMS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`LEXGUARD_*`)
/// 3. Project config (`lexguard.toml` in the config root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexguardConfig {
    pub normalize: NormalizeConfig,
    pub dictionary: DictionaryConfig,
    pub engine: EngineConfig,
}

/// Programmatic overrides that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ignore_case: Option<bool>,
    pub skip_whitespace: Option<bool>,
    pub algorithm: Option<String>,
    pub replacement_char: Option<char>,
}

impl LexguardConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(ov) = overrides {
            Self::apply_overrides(&mut config, ov);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &LexguardConfig) -> Result<(), ConfigError> {
        if config.dictionary.chunk_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "dictionary.chunk_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let algorithm = config.engine.effective_algorithm();
        if !SUPPORTED_ALGORITHMS.contains(&algorithm) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.algorithm".to_string(),
                message: format!(
                    "unknown algorithm '{algorithm}', expected one of {SUPPORTED_ALGORITHMS:?}"
                ),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LexguardConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LexguardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or `true`) value.
    fn merge(base: &mut LexguardConfig, other: &LexguardConfig) {
        // Normalize
        let (b, o) = (&mut base.normalize, &other.normalize);
        if o.ignore_case.is_some() {
            b.ignore_case = o.ignore_case;
        }
        if o.ignore_width.is_some() {
            b.ignore_width = o.ignore_width;
        }
        if o.ignore_num_style.is_some() {
            b.ignore_num_style = o.ignore_num_style;
        }
        if o.skip_whitespace.is_some() {
            b.skip_whitespace = o.skip_whitespace;
        }
        if o.max_distance.is_some() {
            b.max_distance = o.max_distance;
        }
        b.enable_pinyin |= o.enable_pinyin;
        b.enable_homophone |= o.enable_homophone;
        b.enable_similar_shape |= o.enable_similar_shape;
        b.enable_variant_form |= o.enable_variant_form;
        b.enable_zh_py_mix |= o.enable_zh_py_mix;

        // Dictionary
        if other.dictionary.chunk_size.is_some() {
            base.dictionary.chunk_size = other.dictionary.chunk_size;
        }
        if other.dictionary.notify_interval_ms.is_some() {
            base.dictionary.notify_interval_ms = other.dictionary.notify_interval_ms;
        }
        if other.dictionary.notify_immediately.is_some() {
            base.dictionary.notify_immediately = other.dictionary.notify_immediately;
        }

        // Engine
        if other.engine.algorithm.is_some() {
            base.engine.algorithm = other.engine.algorithm.clone();
        }
        if other.engine.replacement_char.is_some() {
            base.engine.replacement_char = other.engine.replacement_char;
        }
        if other.engine.require_words.is_some() {
            base.engine.require_words = other.engine.require_words;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LEXGUARD_IGNORE_CASE`, `LEXGUARD_CHUNK_SIZE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut LexguardConfig) {
        if let Some(v) = env_parse::<bool>("LEXGUARD_IGNORE_CASE") {
            config.normalize.ignore_case = Some(v);
        }
        if let Some(v) = env_parse::<bool>("LEXGUARD_IGNORE_WIDTH") {
            config.normalize.ignore_width = Some(v);
        }
        if let Some(v) = env_parse::<bool>("LEXGUARD_IGNORE_NUM_STYLE") {
            config.normalize.ignore_num_style = Some(v);
        }
        if let Some(v) = env_parse::<bool>("LEXGUARD_SKIP_WHITESPACE") {
            config.normalize.skip_whitespace = Some(v);
        }
        if let Some(v) = env_parse::<usize>("LEXGUARD_CHUNK_SIZE") {
            config.dictionary.chunk_size = Some(v);
        }
        if let Some(v) = env_parse::<u64>("LEXGUARD_NOTIFY_INTERVAL_MS") {
            config.dictionary.notify_interval_ms = Some(v);
        }
        if let Ok(val) = std::env::var("LEXGUARD_ALGORITHM") {
            config.engine.algorithm = Some(val);
        }
        if let Some(v) = env_parse::<char>("LEXGUARD_REPLACEMENT_CHAR") {
            config.engine.replacement_char = Some(v);
        }
    }

    /// Apply explicit overrides to the config.
    pub fn apply_overrides(config: &mut LexguardConfig, ov: &ConfigOverrides) {
        if ov.ignore_case.is_some() {
            config.normalize.ignore_case = ov.ignore_case;
        }
        if ov.skip_whitespace.is_some() {
            config.normalize.skip_whitespace = ov.skip_whitespace;
        }
        if let Some(ref algorithm) = ov.algorithm {
            config.engine.algorithm = Some(algorithm.clone());
        }
        if ov.replacement_char.is_some() {
            config.engine.replacement_char = ov.replacement_char;
        }
    }

    /// Serialize the config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}
