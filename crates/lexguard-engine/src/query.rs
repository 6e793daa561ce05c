//! Category filters for the `*_in` query variants.

use lexguard_core::Category;

/// Accepts hits whose category shares a bit with the queried union.
///
/// `NONE` is special: a `NONE` hit is accepted only when `NONE` itself was
/// queried. An empty query accepts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    union: Category,
    accepts_none: bool,
}

impl CategoryFilter {
    pub fn new(categories: &[Category]) -> Self {
        Self {
            union: categories.iter().copied().collect(),
            accepts_none: categories.iter().any(|c| c.is_none()),
        }
    }

    /// True when no hit can pass.
    pub fn is_empty(&self) -> bool {
        self.union.is_none() && !self.accepts_none
    }

    pub fn accepts(&self, category: Category) -> bool {
        if category.is_none() {
            self.accepts_none
        } else {
            self.union.intersects(category)
        }
    }
}
