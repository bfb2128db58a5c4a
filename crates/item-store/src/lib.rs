//! Item Store
//!
//! Layered architecture:
//! - domain: Item entity, collection and edit mode
//! - repository: Key-value storage abstraction and the JSON persistence bridge
//! - controller: Ties the collection to storage and the add/edit mode

mod config;
mod controller;
pub mod domain;
pub mod repository;

pub use config::StoreConfig;
pub use controller::ItemController;
pub use domain::{Item, ItemStore, ViewMode};
pub use repository::{ItemRepository, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
