//! Insertion-ordered token table shared by every category.

use indexmap::{map::Entry, IndexMap};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Named tokens of a single category, iterated in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTable<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for TokenTable<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> TokenTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a token named `key` exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up a token by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Looks up a token by name for editing.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// Iterates over `(name, token)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over token names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Inserts a token, rejecting names that are empty or already taken.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Result<(), StoreError> {
        let key = key.into();
        if key.is_empty() {
            return Err(StoreError::EmptyName);
        }
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Moves the token at `old` to `new`, keeping its position.
    ///
    /// Renaming a token onto itself succeeds without changes.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        if new.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if old == new {
            return Ok(());
        }
        if self.entries.contains_key(new) {
            return Err(StoreError::AlreadyExists(new.to_owned()));
        }
        let (index, _, value) = self
            .entries
            .shift_remove_full(old)
            .ok_or_else(|| StoreError::NotFound(old.to_owned()))?;
        self.entries.shift_insert(index, new.to_owned(), value);
        Ok(())
    }

    /// Removes and returns the token named `key`.
    pub fn remove(&mut self, key: &str) -> Result<T, StoreError> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))
    }

    /// Returns the first `{prefix}-{n}` name not present in the table,
    /// counting up from `start`.
    #[must_use]
    pub fn next_free_name(&self, prefix: &str, start: usize) -> String {
        (start..)
            .map(|n| format!("{prefix}-{n}"))
            .find(|candidate| !self.entries.contains_key(candidate))
            .unwrap_or_else(|| format!("{prefix}-{start}"))
    }
}

impl<T: Clone> TokenTable<T> {
    /// Deep-copies the token at `key` to a new entry named `new`.
    pub fn duplicate(&mut self, key: &str, new: &str) -> Result<(), StoreError> {
        let copy = self
            .entries
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))?;
        self.insert(new, copy)
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for TokenTable<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a TokenTable<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
