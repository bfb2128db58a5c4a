//! Domain Layer
//!
//! Contains the item entity, the in-memory collection and the edit mode.
//! This layer has NO external dependencies (except serde and log).

mod item;
mod collection;
mod view_mode;

pub use item::Item;
pub use collection::ItemStore;
pub use view_mode::ViewMode;
