//! Collection Errors

use thiserror::Error;

/// Errors raised by the checked grid constructor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("column count must be 1 or 2, got {0}")]
    InvalidColumnCount(usize),

    #[error("row {row} has {found} cells but the grid has {expected} columns")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}
