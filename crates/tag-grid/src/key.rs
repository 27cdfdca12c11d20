//! Collection Keys
//!
//! Opaque identifiers shared by items, rows and cells.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a node in a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the synthetic remove cell appended to an item's row
    pub fn remove_cell(item_key: &Key) -> Self {
        Self(format!("remove-{}", item_key.0))
    }

    /// Key of the row wrapping an item
    pub fn row(item_key: &Key) -> Self {
        Self(format!("row-{}", item_key.0))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<u32> for Key {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}
