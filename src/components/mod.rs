//! UI Components
//!
//! Tag group and its chips.

mod tag;
mod tag_group;

pub use tag::Tag;
pub use tag_group::TagGroup;
