//! Tag Group UI
//!
//! Leptos components rendering a group of removable tags as an ARIA grid.
//! Collection and navigation logic lives in the `tag-grid` crate; this crate
//! binds it to signals and the DOM.

pub mod components;
pub mod context;
pub mod dom;
pub mod logging;

pub use components::{Tag, TagGroup};
pub use context::{Provider, ProviderConfig};
pub use tag_grid::{Item, Key, StyleProps};
