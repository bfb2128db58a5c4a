//! In-Memory Storage
//!
//! HashMap-backed `KeyValueStorage` for tests and host builds.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::{KeyValueStorage, StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
    /// When set, every write fails with this message
    write_failure: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Make subsequent writes fail, as a full browser quota would
    pub fn fail_writes(&self, message: impl Into<String>) {
        *self.write_failure.borrow_mut() = Some(message.into());
    }

    pub fn restore_writes(&self) {
        *self.write_failure.borrow_mut() = None;
    }

    /// Raw value in a slot
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(message) = self.write_failure.borrow().as_ref() {
            return Err(StorageError::Backend(message.clone()));
        }
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
