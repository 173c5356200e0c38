//! In-memory view of a parsed enum spec.
//!
//! A `Registry` maps category names to `Category` tables, and each category
//! maps constant names to normalized numeric literals. Both levels are
//! `BTreeMap`-backed so iteration, lookups across categories and serialized
//! output are deterministic for a given input.

use serde::Serialize;
use std::collections::BTreeMap;

/// Constants declared under one `<name> enum:` header.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Category {
    values: BTreeMap<String, String>,
}

impl Category {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Binds `name` to `value`; a later definition replaces an earlier one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Category name -> constant table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    categories: BTreeMap<String, Category>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Starts `name` over as an empty category, dropping anything it held.
    pub fn reset_category(&mut self, name: &str) {
        self.categories.insert(name.to_string(), Category::new());
    }

    /// Mutable access to `name`, creating it empty when absent.
    pub fn category_mut(&mut self, name: &str) -> &mut Category {
        self.categories.entry(name.to_string()).or_default()
    }

    /// Shorthand for `category(category)?.get(name)`.
    pub fn value(&self, category: &str, name: &str) -> Option<&str> {
        self.category(category)?.get(name)
    }

    /// Finds `name` in any category.
    ///
    /// Categories are scanned in name order and the first hit wins. Only what
    /// has been inserted so far is visible, so callers running this mid-parse
    /// see the registry as of the current line.
    pub fn lookup_definition(&self, name: &str) -> Option<&str> {
        self.categories.values().find_map(|category| category.get(name))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keeps only the categories whose names satisfy `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.categories.retain(|name, _| keep(name));
    }
}
