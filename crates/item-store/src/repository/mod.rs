//! Repository Layer
//!
//! Key-value storage abstraction and the JSON persistence bridge.

mod traits;
mod memory;
mod item_repo;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStorage, StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use item_repo::ItemRepository;
