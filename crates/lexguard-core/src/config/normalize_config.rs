//! Text normalization configuration.

use serde::{Deserialize, Serialize};

/// Options for the single-pass text preprocessor.
///
/// The obfuscation hooks (`enable_pinyin` and friends) are carried so that
/// config files written for richer deployments still parse; no transform is
/// attached to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Fold uppercase to lowercase. Default: true.
    pub ignore_case: Option<bool>,
    /// Fold fullwidth forms to ASCII. Default: true.
    pub ignore_width: Option<bool>,
    /// Map digit variants and CJK numerals to ASCII digits. Default: false.
    pub ignore_num_style: Option<bool>,
    /// Drop whitespace before matching. Default: false.
    pub skip_whitespace: Option<bool>,

    pub enable_pinyin: bool,
    pub enable_homophone: bool,
    pub enable_similar_shape: bool,
    pub enable_variant_form: bool,
    pub enable_zh_py_mix: bool,
    /// Maximum gap between characters of an obfuscated word. Unused.
    pub max_distance: Option<u32>,
}

impl NormalizeConfig {
    /// Config with every transform switched off.
    pub fn identity() -> Self {
        Self {
            ignore_case: Some(false),
            ignore_width: Some(false),
            ignore_num_style: Some(false),
            skip_whitespace: Some(false),
            ..Default::default()
        }
    }

    pub fn effective_ignore_case(&self) -> bool {
        self.ignore_case.unwrap_or(true)
    }

    pub fn effective_ignore_width(&self) -> bool {
        self.ignore_width.unwrap_or(true)
    }

    pub fn effective_ignore_num_style(&self) -> bool {
        self.ignore_num_style.unwrap_or(false)
    }

    pub fn effective_skip_whitespace(&self) -> bool {
        self.skip_whitespace.unwrap_or(false)
    }

    /// True when any of the transform hooks without an implementation is set.
    pub fn has_inert_hooks(&self) -> bool {
        self.enable_pinyin
            || self.enable_homophone
            || self.enable_similar_shape
            || self.enable_variant_form
            || self.enable_zh_py_mix
            || self.max_distance.is_some()
    }
}
