//! Tag Grid
//!
//! Collection model and keyboard navigation behind the tag group widget:
//! - list: keyed items in display order
//! - grid: the list adapted into rows of a data cell plus optional remove cell
//! - state / keyboard / typeahead: focus and navigation over the grid
//! - aria / style / locale: attributes, styling and text direction
//!
//! Nothing here touches the DOM, so it all runs under plain `cargo test`.

pub mod aria;
mod error;
pub mod grid;
mod key;
pub mod keyboard;
pub mod list;
pub mod locale;
pub mod state;
pub mod style;
pub mod typeahead;

pub use error::CollectionError;
pub use grid::{
    build_grid_collection, ActionCell, CellAction, DataCell, GridCell, GridCollection, GridRow,
    NodeLocation,
};
pub use key::Key;
pub use keyboard::{CycleMode, FocusMode, GridKeyboardDelegate, KeyInput};
pub use list::{Item, ListCollection};
pub use locale::{direction_for_locale, Direction, DEFAULT_LOCALE};
pub use state::GridState;
pub use style::{class_names, StyleProps};
pub use typeahead::TypeSelect;
