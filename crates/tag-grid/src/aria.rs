//! Accessibility Attributes
//!
//! Attribute bags for the tag group root, its grid, rows and cells, plus the
//! merge rules used to combine bags onto one element.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::grid::{GridCell, GridCollection, GridRow};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Unique DOM id with a prefix, e.g. `tag-group-3`
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Ordered attribute map; setting an existing name replaces its value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrBag {
    attrs: Vec<(String, String)>,
}

impl AttrBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Overlay `other`: classes accumulate, an empty id never replaces one,
    /// everything else is taken from `other`
    pub fn merge(mut self, other: &AttrBag) -> Self {
        for (name, value) in other.iter() {
            match name {
                "class" => {
                    let joined = match self.get("class") {
                        Some(existing) if !existing.is_empty() => format!("{} {}", existing, value),
                        _ => value.to_string(),
                    };
                    self.set("class", joined.trim());
                }
                "id" if value.is_empty() => {}
                _ => self.set(name, value),
            }
        }
        self
    }
}

/// Merge bags left to right
pub fn merge_attrs(bags: &[&AttrBag]) -> AttrBag {
    bags.iter().fold(AttrBag::new(), |acc, bag| acc.merge(bag))
}

/// Labelling options for the group root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGroupAria {
    pub id: Option<String>,
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
    pub aria_describedby: Option<String>,
}

pub fn tag_group_attrs(aria: &TagGroupAria) -> AttrBag {
    if aria.aria_label.is_none() && aria.aria_labelledby.is_none() {
        log::warn!(
            "If you do not provide a visible label, you must specify an aria-label or aria-labelledby attribute for accessibility"
        );
    }
    let id = aria.id.clone().unwrap_or_else(|| generate_id("tag-group"));
    AttrBag::new()
        .with("id", id)
        .with_opt("aria-label", aria.aria_label.clone())
        .with_opt("aria-labelledby", aria.aria_labelledby.clone())
        .with_opt("aria-describedby", aria.aria_describedby.clone())
}

pub fn grid_attrs<T>(collection: &GridCollection<T>, is_disabled: bool) -> AttrBag {
    let attrs = AttrBag::new()
        .with("role", "grid")
        .with("aria-colcount", collection.column_count().to_string())
        .with("aria-rowcount", collection.len().to_string())
        .with("aria-multiselectable", "false");
    if is_disabled {
        attrs.with("aria-disabled", "true")
    } else {
        attrs
    }
}

pub fn row_attrs<T>(row: &GridRow<T>) -> AttrBag {
    AttrBag::new()
        .with("role", "row")
        .with("aria-rowindex", (row.index() + 1).to_string())
        .with("data-key", row.key().as_str())
}

/// Roving tabindex: only the focusable cell is in the tab sequence
pub fn cell_attrs<T>(cell: &GridCell<T>, is_focusable: bool, is_disabled: bool) -> AttrBag {
    let attrs = AttrBag::new()
        .with("role", "gridcell")
        .with("aria-colindex", (cell.index() + 1).to_string())
        .with("tabindex", if is_focusable { "0" } else { "-1" })
        .with("data-key", cell.key().as_str());
    if is_disabled {
        attrs.with("aria-disabled", "true")
    } else {
        attrs
    }
}
