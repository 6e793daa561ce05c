//! Normalized text with a map back to the original code points.

/// Output of [`Preprocessor::process_with_offsets`](crate::Preprocessor::process_with_offsets).
///
/// `offsets[i]` is the index of the original code point that produced output
/// code point `i`. Offsets are non-decreasing; one original code point may
/// produce several outputs (multi-char lowercase) or none (skipped whitespace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    text: String,
    offsets: Vec<usize>,
    original_len: usize,
}

impl Normalized {
    pub(crate) fn new(text: String, offsets: Vec<usize>, original_len: usize) -> Self {
        Self {
            text,
            offsets,
            original_len,
        }
    }

    /// Unchanged text: every output maps to the code point at the same index.
    pub(crate) fn identity(text: &str) -> Self {
        let offsets: Vec<usize> = (0..text.chars().count()).collect();
        let len = offsets.len();
        Self::new(text.to_string(), offsets, len)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Code-point length of the normalized text.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Code-point length of the original text.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Original index of normalized position `pos`. Positions past the end
    /// map to the end of the original text.
    pub fn original_index(&self, pos: usize) -> usize {
        self.offsets.get(pos).copied().unwrap_or(self.original_len)
    }

    /// Map the normalized span `[start, end)` to `[orig[start], orig[end - 1] + 1)`.
    ///
    /// Original code points dropped inside the span (skipped whitespace) are
    /// covered by the result.
    pub fn original_span(&self, start: usize, end: usize) -> (usize, usize) {
        let orig_start = self.original_index(start);
        if end <= start {
            return (orig_start, orig_start);
        }
        let orig_end = match self.offsets.get(end - 1) {
            Some(&last) => last + 1,
            None => self.original_len,
        };
        (orig_start, orig_end.max(orig_start))
    }
}
