//! Runtime-extensible set of primitive category tags.

use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

use super::Category;
use crate::errors::CategoryError;

/// First bit handed out to runtime registrations (bits 1..=9 are built-in).
const FIRST_DYNAMIC_SHIFT: u32 = 10;

/// Registry of primitive category tags.
///
/// Created with the built-in tags and read-mostly afterwards. Registration
/// assigns the next unused power of two; retired tags keep their bit reserved
/// forever, so a stale value can never be confused with a newer tag.
#[derive(Debug)]
pub struct CategoryRegistry {
    inner: RwLock<RegistryInner>,
}

#[derive(Debug, Clone)]
struct RegistryInner {
    by_name: FxHashMap<String, Category>,
    all: Category,
    next_shift: u32,
}

impl CategoryRegistry {
    /// Create a registry seeded with the built-in tags.
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        for (cat, name) in Category::BUILTIN {
            by_name.insert(name.to_string(), cat);
        }
        Self {
            inner: RwLock::new(RegistryInner {
                by_name,
                all: Category::ALL,
                next_shift: FIRST_DYNAMIC_SHIFT,
            }),
        }
    }

    /// Register a tag by name, returning its category. Registering a name that
    /// is already active returns the existing value.
    pub fn register(&self, name: &str) -> Result<Category, CategoryError> {
        let key = normalize_name(name);
        if key.is_empty() || key == "none" || key == "all" {
            return Err(CategoryError::EmptyName);
        }

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = inner.by_name.get(&key) {
            return Ok(*existing);
        }
        if inner.next_shift >= u32::BITS {
            return Err(CategoryError::Exhausted { name: key });
        }

        let cat = Category::from_bits(1 << inner.next_shift);
        inner.next_shift += 1;
        inner.all |= cat;
        inner.by_name.insert(key.clone(), cat);
        ::tracing::debug!(name = %key, bits = cat.bits(), "category registered");
        Ok(cat)
    }

    /// Retire a tag. Its bit stays reserved and is never handed out again.
    pub fn retire(&self, name: &str) -> Option<Category> {
        let key = normalize_name(name);
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let cat = inner.by_name.remove(&key)?;
        inner.all = Category::from_bits(inner.all.bits() & !cat.bits());
        Some(cat)
    }

    /// Look up a tag by name (case-insensitive). Accepts `none` and `all`.
    pub fn parse(&self, name: &str) -> Option<Category> {
        let key = normalize_name(name);
        match key.as_str() {
            "none" => Some(Category::NONE),
            "all" => Some(self.all()),
            _ => {
                let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
                inner.by_name.get(&key).copied()
            }
        }
    }

    /// Name of a single registered tag.
    pub fn name_of(&self, cat: Category) -> Option<String> {
        if cat.is_none() {
            return Some("none".to_string());
        }
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .by_name
            .iter()
            .find(|(_, c)| **c == cat)
            .map(|(name, _)| name.clone())
    }

    /// Display label of a single tag. Built-in tags use their fixed label;
    /// runtime tags fall back to their registered name.
    pub fn label_of(&self, cat: Category) -> Option<String> {
        match cat.label() {
            Some(label) => Some(label.to_string()),
            None => self.name_of(cat),
        }
    }

    /// Union of every currently registered tag.
    pub fn all(&self) -> Category {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).all
    }

    /// `NONE`, a registered tag, or a union of registered tags.
    pub fn is_valid(&self, cat: Category) -> bool {
        cat.bits() & !self.all().bits() == 0
    }

    /// All registered tags with their names, lowest bit first.
    pub fn primitives(&self) -> Vec<(Category, String)> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut tags: Vec<(Category, String)> = inner
            .by_name
            .iter()
            .map(|(name, cat)| (*cat, name.clone()))
            .collect();
        tags.sort_by_key(|(cat, _)| *cat);
        tags
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_name
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CategoryRegistry {
    fn clone(&self) -> Self {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Self {
            inner: RwLock::new(inner.clone()),
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
