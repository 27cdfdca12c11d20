//! List Collection
//!
//! Ordered, keyed view over the items a tag group displays.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::key::Key;

/// One logical tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item<T> {
    pub key: Key,
    pub value: T,
    /// Visible content; falls back to `text_value` when absent
    #[serde(default)]
    pub rendered: Option<String>,
    /// Plain text used for accessibility and typeahead
    pub text_value: String,
}

impl<T> Item<T> {
    pub fn new(key: impl Into<Key>, value: T, text_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value,
            rendered: None,
            text_value: text_value.into(),
        }
    }

    pub fn with_rendered(mut self, rendered: impl Into<String>) -> Self {
        self.rendered = Some(rendered.into());
        self
    }

    /// Label shown on the chip
    pub fn label(&self) -> &str {
        self.rendered.as_deref().unwrap_or(&self.text_value)
    }
}

/// Ordered collection of items with key lookup.
///
/// Keys are expected to be unique. Duplicates are kept in order; lookup by
/// key resolves to the last occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCollection<T> {
    items: Vec<Arc<Item<T>>>,
    key_map: HashMap<Key, usize>,
}

impl<T> ListCollection<T> {
    pub fn new(items: impl IntoIterator<Item = Item<T>>) -> Self {
        let items: Vec<Arc<Item<T>>> = items.into_iter().map(Arc::new).collect();
        let key_map = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.key.clone(), index))
            .collect();
        Self { items, key_map }
    }

    /// Build items from plain values using key and text accessors
    pub fn from_values<V, K, F>(values: V, key_fn: K, text_fn: F) -> Self
    where
        V: IntoIterator<Item = T>,
        K: Fn(&T) -> Key,
        F: Fn(&T) -> String,
    {
        Self::new(values.into_iter().map(|value| Item {
            key: key_fn(&value),
            text_value: text_fn(&value),
            rendered: None,
            value,
        }))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item<T>>> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.items.iter().map(|item| &item.key)
    }

    pub fn get(&self, key: &Key) -> Option<&Arc<Item<T>>> {
        self.key_map.get(key).and_then(|&index| self.items.get(index))
    }

    pub fn at(&self, index: usize) -> Option<&Arc<Item<T>>> {
        self.items.get(index)
    }

    pub fn first_key(&self) -> Option<&Key> {
        self.items.first().map(|item| &item.key)
    }

    pub fn last_key(&self) -> Option<&Key> {
        self.items.last().map(|item| &item.key)
    }

    pub fn key_after(&self, key: &Key) -> Option<&Key> {
        let index = *self.key_map.get(key)?;
        self.items.get(index + 1).map(|item| &item.key)
    }

    pub fn key_before(&self, key: &Key) -> Option<&Key> {
        let index = *self.key_map.get(key)?;
        index
            .checked_sub(1)
            .and_then(|prev| self.items.get(prev))
            .map(|item| &item.key)
    }
}

impl<T> Default for ListCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            key_map: HashMap::new(),
        }
    }
}

impl<T> FromIterator<Item<T>> for ListCollection<T> {
    fn from_iter<I: IntoIterator<Item = Item<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
