//! Grid Collection
//!
//! Row/column view over a list collection. Each row wraps one item: a data
//! cell carrying the item at column 0, and, for removable groups, a synthetic
//! remove cell at column 1.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::CollectionError;
use crate::key::Key;
use crate::list::{Item, ListCollection};

/// Action performed by a synthetic cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    Remove,
}

/// Cell carrying an item's own fields
#[derive(Debug, Clone, PartialEq)]
pub struct DataCell<T> {
    pub item: Arc<Item<T>>,
}

/// Synthetic control cell with no value of its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCell {
    pub key: Key,
    pub index: usize,
    pub text_value: String,
    pub action: CellAction,
}

impl ActionCell {
    /// Remove control for an item
    pub fn remove<T>(item: &Item<T>) -> Self {
        Self {
            key: Key::remove_cell(&item.key),
            index: 1,
            // TODO: localize once message catalogs exist for the remove label
            text_value: item.text_value.clone(),
            action: CellAction::Remove,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell<T> {
    Data(DataCell<T>),
    Action(ActionCell),
}

impl<T> GridCell<T> {
    pub fn key(&self) -> &Key {
        match self {
            GridCell::Data(cell) => &cell.item.key,
            GridCell::Action(cell) => &cell.key,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            GridCell::Data(_) => 0,
            GridCell::Action(cell) => cell.index,
        }
    }

    /// Nesting level; tag rows are flat
    pub fn level(&self) -> usize {
        0
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            GridCell::Data(cell) => Some(&cell.item.value),
            GridCell::Action(_) => None,
        }
    }

    pub fn rendered(&self) -> Option<&str> {
        match self {
            GridCell::Data(cell) => cell.item.rendered.as_deref(),
            GridCell::Action(_) => None,
        }
    }

    pub fn text_value(&self) -> &str {
        match self {
            GridCell::Data(cell) => &cell.item.text_value,
            GridCell::Action(cell) => &cell.text_value,
        }
    }

    pub fn has_child_nodes(&self) -> bool {
        false
    }

    pub fn is_action(&self) -> bool {
        matches!(self, GridCell::Action(_))
    }
}

/// One tag: an item plus its cells
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<T> {
    key: Key,
    index: usize,
    item: Arc<Item<T>>,
    cells: Vec<GridCell<T>>,
}

impl<T> GridRow<T> {
    /// Data cell first, then the action cells in order
    pub fn new(index: usize, item: Arc<Item<T>>, actions: Vec<ActionCell>) -> Self {
        let mut cells = Vec::with_capacity(actions.len() + 1);
        cells.push(GridCell::Data(DataCell {
            item: Arc::clone(&item),
        }));
        for (offset, mut action) in actions.into_iter().enumerate() {
            action.index = offset + 1;
            cells.push(GridCell::Action(action));
        }
        Self {
            key: Key::row(&item.key),
            index,
            item,
            cells,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item(&self) -> &Arc<Item<T>> {
        &self.item
    }

    pub fn cells(&self) -> &[GridCell<T>] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&GridCell<T>> {
        self.cells.get(column)
    }

    pub fn first_cell(&self) -> Option<&GridCell<T>> {
        self.cells.first()
    }

    pub fn last_cell(&self) -> Option<&GridCell<T>> {
        self.cells.last()
    }

    pub fn remove_cell(&self) -> Option<&ActionCell> {
        self.cells.iter().find_map(|cell| match cell {
            GridCell::Action(action) if action.action == CellAction::Remove => Some(action),
            _ => None,
        })
    }

    /// Visible label of the data cell
    pub fn label(&self) -> &str {
        self.item.label()
    }
}

/// Where a key lives in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLocation {
    Row(usize),
    Cell { row: usize, column: usize },
}

impl NodeLocation {
    pub fn row(&self) -> usize {
        match *self {
            NodeLocation::Row(row) => row,
            NodeLocation::Cell { row, .. } => row,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match *self {
            NodeLocation::Row(_) => None,
            NodeLocation::Cell { column, .. } => Some(column),
        }
    }
}

/// Rows of uniform width plus a key index
#[derive(Debug, Clone, PartialEq)]
pub struct GridCollection<T> {
    rows: Vec<GridRow<T>>,
    column_count: usize,
    key_map: HashMap<Key, NodeLocation>,
}

impl<T> GridCollection<T> {
    /// Checked constructor: every row must have exactly `column_count` cells
    pub fn new(column_count: usize, rows: Vec<GridRow<T>>) -> Result<Self, CollectionError> {
        if !(1..=2).contains(&column_count) {
            return Err(CollectionError::InvalidColumnCount(column_count));
        }
        if let Some((position, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.cells.len() != column_count)
        {
            return Err(CollectionError::ColumnCountMismatch {
                row: position,
                expected: column_count,
                found: row.cells.len(),
            });
        }
        Ok(Self::from_rows(column_count, rows))
    }

    /// Adapt a list into a grid, one row per item in list order.
    ///
    /// Removable groups get a second column of remove cells.
    pub fn from_list(list: &ListCollection<T>, removable: bool) -> Self {
        let column_count = if removable { 2 } else { 1 };
        let rows = list
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut actions = Vec::new();
                if removable {
                    actions.push(ActionCell::remove(item));
                }
                GridRow::new(index, Arc::clone(item), actions)
            })
            .collect();
        Self::from_rows(column_count, rows)
    }

    /// Index rows and cells. Cell keys are kept as given; a row key that
    /// would shadow a cell key or an earlier row key gets another `row-`
    /// prefix until it is unique.
    fn from_rows(column_count: usize, mut rows: Vec<GridRow<T>>) -> Self {
        let mut taken: HashSet<Key> = rows
            .iter()
            .flat_map(|row| row.cells.iter().map(|cell| cell.key().clone()))
            .collect();
        let mut key_map = HashMap::new();
        for (row_index, row) in rows.iter_mut().enumerate() {
            row.index = row_index;
            while taken.contains(&row.key) {
                row.key = Key::row(&row.key);
            }
            taken.insert(row.key.clone());
            key_map.insert(row.key.clone(), NodeLocation::Row(row_index));
            for (column, cell) in row.cells.iter().enumerate() {
                key_map.insert(
                    cell.key().clone(),
                    NodeLocation::Cell {
                        row: row_index,
                        column,
                    },
                );
            }
        }
        Self {
            rows,
            column_count,
            key_map,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[GridRow<T>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&GridRow<T>> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridRow<T>> {
        self.rows.iter()
    }

    pub fn locate(&self, key: &Key) -> Option<NodeLocation> {
        self.key_map.get(key).copied()
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.key_map.contains_key(key)
    }

    /// Row owning `key`, whether `key` names the row or one of its cells
    pub fn row_of(&self, key: &Key) -> Option<&GridRow<T>> {
        self.locate(key).and_then(|loc| self.rows.get(loc.row()))
    }

    pub fn cell(&self, key: &Key) -> Option<&GridCell<T>> {
        match self.locate(key)? {
            NodeLocation::Cell { row, column } => self.rows.get(row)?.cell(column),
            NodeLocation::Row(_) => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a GridCollection<T> {
    type Item = &'a GridRow<T>;
    type IntoIter = std::slice::Iter<'a, GridRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Adapt a list collection into a grid collection
pub fn build_grid_collection<T>(list: &ListCollection<T>, removable: bool) -> GridCollection<T> {
    GridCollection::from_list(list, removable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> ListCollection<&'static str> {
        ListCollection::new(vec![
            Item::new("a", "apple", "Apple"),
            Item::new("b", "banana", "Banana"),
        ])
    }

    fn numbered(n: usize) -> ListCollection<usize> {
        ListCollection::new((0..n).map(|i| Item::new(format!("k{}", i), i, format!("Item {}", i))))
    }

    #[test]
    fn test_removable_scenario() {
        let grid = build_grid_collection(&fruits(), true);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.len(), 2);

        let row = grid.row(0).unwrap();
        let cells = row.cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].key().as_str(), "a");
        assert_eq!(cells[0].index(), 0);
        assert_eq!(cells[0].value(), Some(&"apple"));
        assert_eq!(cells[0].text_value(), "Apple");

        assert_eq!(cells[1].key().as_str(), "remove-a");
        assert_eq!(cells[1].index(), 1);
        assert_eq!(cells[1].level(), 0);
        assert_eq!(cells[1].value(), None);
        assert_eq!(cells[1].rendered(), None);
        assert_eq!(cells[1].text_value(), "Apple");
        assert!(!cells[1].has_child_nodes());
        assert!(cells[1].is_action());
    }

    #[test]
    fn test_non_removable_scenario() {
        let grid = build_grid_collection(&fruits(), false);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|row| row.cells().len() == 1));
        assert!(grid.iter().all(|row| row.remove_cell().is_none()));
    }

    #[test]
    fn test_column_count_uniform_for_any_length() {
        for n in [1, 3, 10] {
            let plain = build_grid_collection(&numbered(n), false);
            assert_eq!(plain.len(), n);
            assert!(plain.iter().all(|row| row.cells().len() == 1));

            let removable = build_grid_collection(&numbered(n), true);
            assert_eq!(removable.len(), n);
            for row in &removable {
                assert_eq!(row.cells().len(), 2);
                let expected = format!("remove-{}", row.item().key);
                assert_eq!(row.cells()[1].key().as_str(), expected);
            }
        }
    }

    #[test]
    fn test_row_order_matches_input() {
        let grid = build_grid_collection(&numbered(5), true);
        let order: Vec<usize> = grid.iter().map(|row| row.item().value).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        let indices: Vec<usize> = grid.iter().map(GridRow::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_list_keeps_column_count() {
        let empty = ListCollection::<u8>::default();
        let removable = build_grid_collection(&empty, true);
        assert!(removable.is_empty());
        assert_eq!(removable.column_count(), 2);

        let plain = build_grid_collection(&empty, false);
        assert!(plain.is_empty());
        assert_eq!(plain.column_count(), 1);
    }

    #[test]
    fn test_rebuild_is_structurally_equal() {
        let list = fruits();
        assert_eq!(
            build_grid_collection(&list, true),
            build_grid_collection(&list, true)
        );
    }

    #[test]
    fn test_cells_share_the_list_item() {
        let list = fruits();
        let grid = build_grid_collection(&list, true);
        match &grid.row(1).unwrap().cells()[0] {
            GridCell::Data(cell) => {
                assert!(Arc::ptr_eq(&cell.item, list.get(&Key::from("b")).unwrap()))
            }
            GridCell::Action(_) => panic!("column 0 must be a data cell"),
        }
    }

    #[test]
    fn test_locate_rows_and_cells() {
        let grid = build_grid_collection(&fruits(), true);
        assert_eq!(grid.locate(&Key::from("row-b")), Some(NodeLocation::Row(1)));
        assert_eq!(
            grid.locate(&Key::from("remove-b")),
            Some(NodeLocation::Cell { row: 1, column: 1 })
        );
        assert_eq!(grid.row_of(&Key::from("b")).unwrap().key().as_str(), "row-b");
        assert!(grid.cell(&Key::from("row-a")).is_none());
        assert!(grid.locate(&Key::from("zzz")).is_none());
    }

    #[test]
    fn test_checked_constructor_rejects_mixed_rows() {
        let list = fruits();
        let mut rows: Vec<GridRow<&str>> = build_grid_collection(&list, true).rows().to_vec();
        rows.push(GridRow::new(2, Arc::new(Item::new("c", "cherry", "Cherry")), vec![]));

        let err = GridCollection::new(2, rows).unwrap_err();
        assert_eq!(
            err,
            CollectionError::ColumnCountMismatch { row: 2, expected: 2, found: 1 }
        );
        assert_eq!(
            GridCollection::<u8>::new(3, vec![]).unwrap_err(),
            CollectionError::InvalidColumnCount(3)
        );
    }

    #[test]
    fn test_checked_constructor_accepts_uniform_rows() {
        let rows = build_grid_collection(&fruits(), false).rows().to_vec();
        let grid = GridCollection::new(1, rows).unwrap();
        assert_eq!(grid, build_grid_collection(&fruits(), false));
    }

    #[test]
    fn test_checked_constructor_reports_row_position() {
        let mut rows: Vec<GridRow<&str>> = build_grid_collection(&fruits(), true).rows().to_vec();
        rows.insert(0, GridRow::new(7, Arc::new(Item::new("c", "cherry", "Cherry")), vec![]));

        let err = GridCollection::new(2, rows).unwrap_err();
        assert_eq!(
            err,
            CollectionError::ColumnCountMismatch { row: 0, expected: 2, found: 1 }
        );
    }

    #[test]
    fn test_row_keys_never_shadow_item_keys() {
        let list = ListCollection::new(vec![
            Item::new("a", "apple", "Apple"),
            Item::new("row-a", "avocado", "Avocado"),
        ]);
        let grid = build_grid_collection(&list, true);

        assert_eq!(
            grid.locate(&Key::from("row-a")),
            Some(NodeLocation::Cell { row: 1, column: 0 })
        );
        let first = grid.row(0).unwrap();
        assert_eq!(first.key().as_str(), "row-row-a");
        assert_eq!(grid.locate(first.key()), Some(NodeLocation::Row(0)));
        let second = grid.row(1).unwrap();
        assert_eq!(second.key().as_str(), "row-row-row-a");
        assert_eq!(grid.locate(second.key()), Some(NodeLocation::Row(1)));
        assert_eq!(grid.row_of(&Key::from("a")).unwrap().index(), 0);

        let keys: HashSet<&Key> = grid
            .iter()
            .flat_map(|row| std::iter::once(row.key()).chain(row.cells().iter().map(GridCell::key)))
            .collect();
        assert_eq!(keys.len(), 6);
    }
}
