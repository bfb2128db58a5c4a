//! Item Repository
//!
//! Mirrors the whole item collection into a single key-value slot as a JSON array.
//! No incremental updates: every save rewrites the slot.

use super::traits::{KeyValueStorage, StorageError, StorageResult};
use crate::config::StoreConfig;
use crate::domain::Item;

pub struct ItemRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ItemRepository<S> {
    pub fn new(storage: S, config: &StoreConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted collection.
    ///
    /// An absent slot or a stored `null` is an empty collection.
    pub fn load(&self) -> StorageResult<Vec<Item>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            log::debug!("slot {:?} is empty", self.key);
            return Ok(Vec::new());
        };
        let items: Option<Vec<Item>> = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Corrupt(format!("slot {:?}: {}", self.key, e)))?;
        let items = items.unwrap_or_default();
        log::debug!("loaded {} items from {:?}", items.len(), self.key);
        Ok(items)
    }

    /// Overwrite the slot with the full collection
    pub fn save(&self, items: &[Item]) -> StorageResult<()> {
        let json = serde_json::to_string(items)
            .map_err(|e| StorageError::Backend(format!("serialize: {}", e)))?;
        self.storage.set_item(&self.key, &json)?;
        log::debug!("saved {} items to {:?}", items.len(), self.key);
        Ok(())
    }
}
