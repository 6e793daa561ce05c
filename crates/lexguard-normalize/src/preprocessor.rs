//! Single-pass, per-code-point text transform.

use lexguard_core::config::NormalizeConfig;

use crate::fold::{fold_numeral, fold_width};
use crate::normalized::Normalized;

/// Configurable text normalizer.
///
/// Each input code point is transformed independently and in order:
/// case fold, whitespace skip, width fold, numeral fold. The transform is
/// pure, so the same preprocessor is used for dictionary keys and for
/// scanned text.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    config: NormalizeConfig,
    ignore_case: bool,
    skip_whitespace: bool,
    ignore_width: bool,
    ignore_num_style: bool,
}

impl Preprocessor {
    pub fn new(config: NormalizeConfig) -> Self {
        if config.has_inert_hooks() {
            tracing::debug!(
                pinyin = config.enable_pinyin,
                homophone = config.enable_homophone,
                similar_shape = config.enable_similar_shape,
                variant_form = config.enable_variant_form,
                zh_py_mix = config.enable_zh_py_mix,
                max_distance = ?config.max_distance,
                "obfuscation hooks are configured but have no effect"
            );
        }
        Self {
            ignore_case: config.effective_ignore_case(),
            skip_whitespace: config.effective_skip_whitespace(),
            ignore_width: config.effective_ignore_width(),
            ignore_num_style: config.effective_ignore_num_style(),
            config,
        }
    }

    /// A preprocessor that leaves text untouched.
    pub fn identity() -> Self {
        Self::new(NormalizeConfig::identity())
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// True when no option changes text.
    pub fn is_identity(&self) -> bool {
        !(self.ignore_case || self.skip_whitespace || self.ignore_width || self.ignore_num_style)
    }

    /// Normalized text only.
    pub fn process(&self, text: &str) -> String {
        if self.is_identity() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            self.fold(ch, |c| out.push(c));
        }
        out
    }

    /// Normalized text plus the original index of every output code point.
    pub fn process_with_offsets(&self, text: &str) -> Normalized {
        if self.is_identity() {
            return Normalized::identity(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len());
        let mut original_len = 0;
        for (index, ch) in text.chars().enumerate() {
            self.fold(ch, |c| {
                out.push(c);
                offsets.push(index);
            });
            original_len = index + 1;
        }
        Normalized::new(out, offsets, original_len)
    }

    fn fold(&self, ch: char, mut emit: impl FnMut(char)) {
        if self.ignore_case {
            for lower in ch.to_lowercase() {
                self.fold_rest(lower, &mut emit);
            }
        } else {
            self.fold_rest(ch, &mut emit);
        }
    }

    fn fold_rest(&self, mut ch: char, emit: &mut impl FnMut(char)) {
        if self.skip_whitespace && ch.is_whitespace() {
            return;
        }
        if self.ignore_width {
            ch = fold_width(ch);
        }
        if self.ignore_num_style {
            ch = fold_numeral(ch).unwrap_or(ch);
        }
        emit(ch);
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(NormalizeConfig::default())
    }
}
