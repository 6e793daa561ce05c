//! Category algebra: a `u32` bitset where each bit is one semantic tag.
//!
//! Built-in tags occupy bits 1..=9 (bit 0 is never used, so the first tag is `1 << 1`).
//! Additional tags can be registered at runtime through [`CategoryRegistry`].

pub mod registry;

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

pub use registry::CategoryRegistry;

/// One or more semantic tags attached to a dictionary word.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Category(u32);

impl Category {
    /// Unclassified.
    pub const NONE: Category = Category(0);
    pub const PORNOGRAPHY: Category = Category(1 << 1);
    pub const POLITICAL: Category = Category(1 << 2);
    pub const VIOLENCE: Category = Category(1 << 3);
    pub const GAMBLING: Category = Category(1 << 4);
    pub const DRUGS: Category = Category(1 << 5);
    pub const PROFANITY: Category = Category(1 << 6);
    pub const DISCRIMINATION: Category = Category(1 << 7);
    pub const SCAM: Category = Category(1 << 8);
    pub const CUSTOM: Category = Category(1 << 9);

    /// Union of every built-in tag. Runtime-registered tags are only part of
    /// [`CategoryRegistry::all`].
    pub const ALL: Category = Category(
        Self::PORNOGRAPHY.0
            | Self::POLITICAL.0
            | Self::VIOLENCE.0
            | Self::GAMBLING.0
            | Self::DRUGS.0
            | Self::PROFANITY.0
            | Self::DISCRIMINATION.0
            | Self::SCAM.0
            | Self::CUSTOM.0,
    );

    /// Built-in tags with their stable names, in bit order.
    pub const BUILTIN: [(Category, &'static str); 9] = [
        (Self::PORNOGRAPHY, "pornography"),
        (Self::POLITICAL, "political"),
        (Self::VIOLENCE, "violence"),
        (Self::GAMBLING, "gambling"),
        (Self::DRUGS, "drugs"),
        (Self::PROFANITY, "profanity"),
        (Self::DISCRIMINATION, "discrimination"),
        (Self::SCAM, "scam"),
        (Self::CUSTOM, "custom"),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Category(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True when exactly one bit is set.
    pub const fn is_primitive(self) -> bool {
        self.0.is_power_of_two()
    }

    /// True when the two values share at least one tag.
    pub const fn intersects(self, other: Category) -> bool {
        self.0 & other.0 != 0
    }

    /// Query-side containment test.
    ///
    /// `NONE` is only contained by `NONE`. Every other value, including
    /// `ALL`, is treated as a plain union: containment means sharing a bit.
    pub const fn contains(self, other: Category) -> bool {
        if other.is_none() {
            return self.is_none();
        }
        self.intersects(other)
    }

    /// Validity against the built-in tag set. Use
    /// [`CategoryRegistry::is_valid`] when runtime tags are in play.
    pub const fn is_valid(self) -> bool {
        self.0 & !Self::ALL.0 == 0
    }

    /// Stable name of a single built-in tag, or `"none"`.
    pub fn builtin_name(self) -> Option<&'static str> {
        if self.is_none() {
            return Some("none");
        }
        Self::BUILTIN
            .iter()
            .find(|(cat, _)| *cat == self)
            .map(|(_, name)| *name)
    }

    /// Display label of `NONE` or a single built-in tag.
    pub fn label(self) -> Option<&'static str> {
        let label = match self {
            Self::NONE => "未分类",
            Self::PORNOGRAPHY => "涉黄",
            Self::POLITICAL => "涉政",
            Self::VIOLENCE => "暴力",
            Self::GAMBLING => "赌博",
            Self::DRUGS => "毒品",
            Self::PROFANITY => "脏话",
            Self::DISCRIMINATION => "歧视",
            Self::SCAM => "诈骗",
            Self::CUSTOM => "自定义",
            _ => return None,
        };
        Some(label)
    }

    /// Iterate the primitive tags set in this value, lowest bit first.
    pub fn primitives(self) -> impl Iterator<Item = Category> {
        let bits = self.0;
        (0..u32::BITS)
            .map(|shift| 1u32 << shift)
            .filter(move |bit| bits & bit != 0)
            .map(Category)
    }
}

impl BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        Category(self.0 | rhs.0)
    }
}

impl BitOrAssign for Category {
    fn bitor_assign(&mut self, rhs: Category) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Category {
    type Output = Category;

    fn bitand(self, rhs: Category) -> Category {
        Category(self.0 & rhs.0)
    }
}

impl BitAndAssign for Category {
    fn bitand_assign(&mut self, rhs: Category) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Category> for Category {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Category::NONE, |acc, c| acc | c)
    }
}

impl From<u32> for Category {
    fn from(bits: u32) -> Self {
        Category(bits)
    }
}

impl From<Category> for u32 {
    fn from(cat: Category) -> Self {
        cat.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.builtin_name() {
            return f.write_str(name);
        }
        let mut first = true;
        for tag in self.primitives() {
            if !first {
                f.write_str("|")?;
            }
            first = false;
            match tag.builtin_name() {
                Some(name) => f.write_str(name)?,
                None => write!(f, "tag(0x{:x})", tag.0)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_union() {
        let cat = Category::VIOLENCE | Category::POLITICAL;
        assert_eq!(cat.to_string(), "political|violence");
        assert_eq!(Category::NONE.to_string(), "none");
        assert_eq!(Category::from_bits(1 << 20).to_string(), "tag(0x100000)");
    }

    #[test]
    fn labels_cover_builtins_only() {
        assert_eq!(Category::NONE.label(), Some("未分类"));
        assert!(Category::BUILTIN.iter().all(|(cat, _)| cat.label().is_some()));
        assert_eq!((Category::SCAM | Category::DRUGS).label(), None);
    }

    #[test]
    fn first_tag_is_bit_one() {
        assert_eq!(Category::PORNOGRAPHY.bits(), 2);
        assert_eq!(Category::ALL.primitives().count(), 9);
    }
}
