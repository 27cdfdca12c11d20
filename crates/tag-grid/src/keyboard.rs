//! Grid Keyboard Navigation
//!
//! Arrow-key, Home/End, paging and typeahead rules over a grid collection.
//! Disabled rows are skipped when moving between rows.

use std::collections::HashSet;

use crate::grid::{GridCollection, GridRow};
use crate::key::Key;
use crate::locale::Direction;

/// What receives focus inside a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    #[default]
    Cell,
    Row,
}

/// Behaviour of horizontal moves past the edge of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleMode {
    /// Stop at the edge
    None,
    /// Wrap to the other end of the same row
    Within,
    /// Continue into the neighbouring row
    #[default]
    Between,
}

/// A key press, decoupled from the DOM event that produced it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Delete or Backspace
    pub fn is_remove(&self) -> bool {
        matches!(self.key.as_str(), "Delete" | "Backspace")
    }

    /// Character for typeahead, if this press types one
    pub fn printable_char(&self) -> Option<char> {
        if self.ctrl || self.meta || self.alt {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

pub struct GridKeyboardDelegate<'a, T> {
    collection: &'a GridCollection<T>,
    disabled_keys: &'a HashSet<Key>,
    direction: Direction,
    focus_mode: FocusMode,
    cycle_mode: CycleMode,
}

impl<'a, T> GridKeyboardDelegate<'a, T> {
    pub fn new(collection: &'a GridCollection<T>, disabled_keys: &'a HashSet<Key>) -> Self {
        Self {
            collection,
            disabled_keys,
            direction: Direction::Ltr,
            focus_mode: FocusMode::Cell,
            cycle_mode: CycleMode::Between,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_focus_mode(mut self, focus_mode: FocusMode) -> Self {
        self.focus_mode = focus_mode;
        self
    }

    pub fn with_cycle_mode(mut self, cycle_mode: CycleMode) -> Self {
        self.cycle_mode = cycle_mode;
        self
    }

    fn is_row_enabled(&self, row: &GridRow<T>) -> bool {
        !self.disabled_keys.contains(row.key()) && !self.disabled_keys.contains(&row.item().key)
    }

    /// (row index, column) of a key; column is None for row keys
    fn position(&self, key: &Key) -> Option<(usize, Option<usize>)> {
        let location = self.collection.locate(key)?;
        Some((location.row(), location.column()))
    }

    fn next_enabled_row(&self, after: usize) -> Option<&'a GridRow<T>> {
        let collection = self.collection;
        collection.rows().iter().skip(after + 1).find(|row| self.is_row_enabled(row))
    }

    fn previous_enabled_row(&self, before: usize) -> Option<&'a GridRow<T>> {
        let collection = self.collection;
        collection.rows()[..before.min(collection.len())]
            .iter()
            .rev()
            .find(|row| self.is_row_enabled(row))
    }

    fn first_enabled_row(&self) -> Option<&'a GridRow<T>> {
        let collection = self.collection;
        collection.rows().iter().find(|row| self.is_row_enabled(row))
    }

    fn last_enabled_row(&self) -> Option<&'a GridRow<T>> {
        let collection = self.collection;
        collection.rows().iter().rev().find(|row| self.is_row_enabled(row))
    }

    /// Focus target inside `row`, keeping `column` when coming from a cell
    fn row_target(&self, row: &GridRow<T>, column: Option<usize>) -> Option<Key> {
        match column {
            Some(column) => Some(row.cell(column).map_or(row.key(), |cell| cell.key()).clone()),
            None => match self.focus_mode {
                FocusMode::Row => Some(row.key().clone()),
                FocusMode::Cell => row.first_cell().map(|cell| cell.key().clone()),
            },
        }
    }

    pub fn key_below(&self, key: &Key) -> Option<Key> {
        let (row, column) = self.position(key)?;
        let next = self.next_enabled_row(row)?;
        self.row_target(next, column)
    }

    pub fn key_above(&self, key: &Key) -> Option<Key> {
        let (row, column) = self.position(key)?;
        let previous = self.previous_enabled_row(row)?;
        self.row_target(previous, column)
    }

    pub fn key_right_of(&self, key: &Key) -> Option<Key> {
        match self.direction {
            Direction::Ltr => self.next_in_reading_order(key),
            Direction::Rtl => self.previous_in_reading_order(key),
        }
    }

    pub fn key_left_of(&self, key: &Key) -> Option<Key> {
        match self.direction {
            Direction::Ltr => self.previous_in_reading_order(key),
            Direction::Rtl => self.next_in_reading_order(key),
        }
    }

    fn next_in_reading_order(&self, key: &Key) -> Option<Key> {
        let (row_index, column) = self.position(key)?;
        let row = self.collection.row(row_index)?;
        let Some(column) = column else {
            return row.first_cell().map(|cell| cell.key().clone());
        };
        if let Some(cell) = row.cell(column + 1) {
            return Some(cell.key().clone());
        }
        match self.cycle_mode {
            CycleMode::None => None,
            CycleMode::Within => row.first_cell().map(|cell| cell.key().clone()),
            CycleMode::Between => self
                .next_enabled_row(row_index)
                .or_else(|| self.first_enabled_row())
                .and_then(GridRow::first_cell)
                .map(|cell| cell.key().clone()),
        }
    }

    fn previous_in_reading_order(&self, key: &Key) -> Option<Key> {
        let (row_index, column) = self.position(key)?;
        let row = self.collection.row(row_index)?;
        let Some(column) = column else {
            return row.last_cell().map(|cell| cell.key().clone());
        };
        if let Some(cell) = column.checked_sub(1).and_then(|prev| row.cell(prev)) {
            return Some(cell.key().clone());
        }
        match self.cycle_mode {
            CycleMode::None => None,
            CycleMode::Within => row.last_cell().map(|cell| cell.key().clone()),
            CycleMode::Between => self
                .previous_enabled_row(row_index)
                .or_else(|| self.last_enabled_row())
                .and_then(GridRow::last_cell)
                .map(|cell| cell.key().clone()),
        }
    }

    /// First key of the row holding `from`, or of the grid when `global`
    pub fn first_key(&self, from: Option<&Key>, global: bool) -> Option<Key> {
        if !global {
            if let Some((row, Some(_))) = from.and_then(|key| self.position(key)) {
                return self.collection.row(row)?.first_cell().map(|cell| cell.key().clone());
            }
        }
        let row = self.first_enabled_row()?;
        self.row_target(row, None)
    }

    /// Last key of the row holding `from`, or of the grid when `global`
    pub fn last_key(&self, from: Option<&Key>, global: bool) -> Option<Key> {
        if !global {
            if let Some((row, Some(_))) = from.and_then(|key| self.position(key)) {
                return self.collection.row(row)?.last_cell().map(|cell| cell.key().clone());
            }
        }
        let row = self.last_enabled_row()?;
        match self.focus_mode {
            FocusMode::Row => Some(row.key().clone()),
            FocusMode::Cell => row.last_cell().map(|cell| cell.key().clone()),
        }
    }

    // No layout is measured, so a page is the whole grid.
    pub fn key_page_below(&self, key: &Key) -> Option<Key> {
        let (_, column) = self.position(key)?;
        let row = self.last_enabled_row()?;
        self.row_target(row, column)
    }

    pub fn key_page_above(&self, key: &Key) -> Option<Key> {
        let (_, column) = self.position(key)?;
        let row = self.first_enabled_row()?;
        self.row_target(row, column)
    }

    /// First row at or after `from` whose text starts with `search`
    pub fn key_for_search(&self, search: &str, from: Option<&Key>) -> Option<Key> {
        if search.is_empty() {
            return None;
        }
        let needle = search.to_lowercase();
        let start = from.and_then(|key| self.position(key)).map_or(0, |(row, _)| row);
        let collection = self.collection;
        let row = collection
            .rows()
            .iter()
            .skip(start)
            .filter(|row| self.is_row_enabled(row))
            .find(|row| row.item().text_value.to_lowercase().starts_with(&needle))?;
        match self.focus_mode {
            FocusMode::Row => Some(row.key().clone()),
            FocusMode::Cell => row.first_cell().map(|cell| cell.key().clone()),
        }
    }

    /// Typeahead target: search from `from`, then wrap to the top
    pub fn key_for_type_select(&self, search: &str, from: Option<&Key>) -> Option<Key> {
        self.key_for_search(search, from)
            .or_else(|| self.key_for_search(search, None))
    }

    /// Target of a navigation key press, `None` when the key does not move focus
    pub fn navigate(&self, focused: Option<&Key>, input: &KeyInput) -> Option<Key> {
        let global = input.ctrl || input.meta;
        let Some(focused) = focused.filter(|key| self.collection.contains(key)) else {
            return match input.key.as_str() {
                "End" | "PageDown" => self.last_key(None, true),
                "ArrowDown" | "ArrowUp" | "ArrowLeft" | "ArrowRight" | "Home" | "PageUp" => {
                    self.first_key(None, true)
                }
                _ => None,
            };
        };
        match input.key.as_str() {
            "ArrowDown" => self.key_below(focused),
            "ArrowUp" => self.key_above(focused),
            "ArrowRight" => self.key_right_of(focused),
            "ArrowLeft" => self.key_left_of(focused),
            "Home" => self.first_key(Some(focused), global),
            "End" => self.last_key(Some(focused), global),
            "PageDown" => self.key_page_below(focused),
            "PageUp" => self.key_page_above(focused),
            _ => None,
        }
    }
}
