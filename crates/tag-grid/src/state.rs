//! Grid State
//!
//! Interactive state over a grid collection: the focused key, disabled keys
//! and the group-wide disabled flag.

use std::collections::HashSet;

use crate::grid::{GridCollection, GridRow, NodeLocation};
use crate::key::Key;
use crate::keyboard::{CycleMode, FocusMode, GridKeyboardDelegate};
use crate::locale::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct GridState<T> {
    collection: GridCollection<T>,
    disabled_keys: HashSet<Key>,
    is_disabled: bool,
    focused_key: Option<Key>,
    is_focused: bool,
}

impl<T> GridState<T> {
    pub fn new(collection: GridCollection<T>) -> Self {
        Self {
            collection,
            disabled_keys: HashSet::new(),
            is_disabled: false,
            focused_key: None,
            is_focused: false,
        }
    }

    pub fn with_disabled_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.disabled_keys = keys.into_iter().collect();
        self
    }

    pub fn collection(&self) -> &GridCollection<T> {
        &self.collection
    }

    /// Swap in a rebuilt collection, moving focus off keys that vanished.
    ///
    /// Focus lands on the same column of the nearest enabled row, searching
    /// forward then backward from the old row index clamped to the last row.
    pub fn set_collection(&mut self, collection: GridCollection<T>) {
        let previous = self
            .focused_key
            .as_ref()
            .and_then(|key| self.collection.locate(key));
        self.collection = collection;

        let Some(key) = self.focused_key.as_ref() else {
            return;
        };
        if self.collection.contains(key) {
            return;
        }
        let fallback = previous.and_then(|location| self.fallback_key(location));
        log::debug!("focused key {} removed, focus moves to {:?}", key, fallback);
        self.focused_key = fallback;
    }

    fn fallback_key(&self, location: NodeLocation) -> Option<Key> {
        let last = self.collection.len().checked_sub(1)?;
        let start = location.row().min(last);
        let rows = self.collection.rows();
        let row = rows[start..]
            .iter()
            .chain(rows[..start].iter().rev())
            .find(|row| !self.is_row_disabled(row))?;
        match location.column() {
            Some(column) => row
                .cell(column)
                .or_else(|| row.first_cell())
                .map(|cell| cell.key().clone()),
            None => Some(row.key().clone()),
        }
    }

    pub fn disabled_keys(&self) -> &HashSet<Key> {
        &self.disabled_keys
    }

    pub fn set_disabled_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.disabled_keys = keys.into_iter().collect();
    }

    pub fn is_group_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn set_group_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    /// Disabled directly, through its row or item key, or through the group
    pub fn is_disabled(&self, key: &Key) -> bool {
        if self.is_disabled || self.disabled_keys.contains(key) {
            return true;
        }
        self.collection.row_of(key).is_some_and(|row| self.is_row_disabled(row))
    }

    // Ignores the group flag
    fn is_row_disabled(&self, row: &GridRow<T>) -> bool {
        self.disabled_keys.contains(row.key()) || self.disabled_keys.contains(&row.item().key)
    }

    pub fn focused_key(&self) -> Option<&Key> {
        self.focused_key.as_ref()
    }

    pub fn set_focused_key(&mut self, key: Option<Key>) {
        self.focused_key = key;
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    /// Key that takes part in the tab sequence
    pub fn focusable_key(&self) -> Option<&Key> {
        if let Some(key) = self.focused_key.as_ref().filter(|key| self.collection.contains(key)) {
            return Some(key);
        }
        self.collection
            .iter()
            .find(|row| !self.is_disabled(row.key()))
            .and_then(|row| row.first_cell())
            .map(|cell| cell.key())
    }

    /// Cell-focus delegate cycling between rows, the tag group's navigation
    pub fn keyboard_delegate(&self, direction: Direction) -> GridKeyboardDelegate<'_, T> {
        GridKeyboardDelegate::new(&self.collection, &self.disabled_keys)
            .with_direction(direction)
            .with_focus_mode(FocusMode::Cell)
            .with_cycle_mode(CycleMode::Between)
    }
}
