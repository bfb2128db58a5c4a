//! Item Controller
//!
//! Owns the collection, its persistence bridge and the add/edit mode.
//! Every call that changes the collection writes the whole collection back.

use crate::domain::{Item, ItemStore, ViewMode};
use crate::repository::{ItemRepository, KeyValueStorage, StorageError, StorageResult};

pub struct ItemController<S> {
    store: ItemStore,
    repository: ItemRepository<S>,
    mode: ViewMode,
    load_error: Option<StorageError>,
}

impl<S: KeyValueStorage> ItemController<S> {
    /// Load the persisted collection and start in add mode.
    ///
    /// A failed load starts the session empty; the error stays available
    /// through [`ItemController::load_error`].
    pub fn open(repository: ItemRepository<S>) -> Self {
        let (store, load_error) = match repository.load() {
            Ok(items) => (ItemStore::from_items(items), None),
            Err(e) => {
                log::warn!("starting with an empty list: {}", e);
                (ItemStore::new(), Some(e))
            }
        };
        Self {
            store,
            repository,
            mode: ViewMode::Adding,
            load_error,
        }
    }

    pub fn items(&self) -> &[Item] {
        self.store.list()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Item the edit form is bound to
    pub fn edit_target(&self) -> Option<&Item> {
        self.mode.target().and_then(|id| self.store.get(id))
    }

    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }

    /// Add a named item. Blank names change nothing and write nothing.
    pub fn add(&mut self, name: &str) -> StorageResult<Option<Item>> {
        let Some(item) = self.store.add(name) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(item))
    }

    /// Delete an item. Deleting the edit target returns to add mode.
    pub fn remove(&mut self, id: u32) -> StorageResult<bool> {
        if self.store.remove(id).is_none() {
            return Ok(false);
        }
        if self.mode == ViewMode::Editing(id) {
            self.mode = ViewMode::Adding;
        }
        self.persist()?;
        Ok(true)
    }

    /// Switch the form to editing `id`. Unknown ids leave the mode unchanged.
    pub fn begin_edit(&mut self, id: u32) -> bool {
        if !self.store.contains(id) {
            log::warn!("cannot edit missing item {}", id);
            return false;
        }
        self.mode = ViewMode::Editing(id);
        true
    }

    /// Apply the edit form's name to the target and return to add mode.
    ///
    /// The name is not checked for blankness. Returns whether an item was renamed.
    pub fn submit_edit(&mut self, new_name: &str) -> StorageResult<bool> {
        let Some(id) = self.mode.target() else {
            return Ok(false);
        };
        self.mode = ViewMode::Adding;
        if !self.store.replace(id, new_name) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Leave edit mode without touching the collection
    pub fn cancel_edit(&mut self) {
        self.mode = ViewMode::Adding;
    }

    fn persist(&self) -> StorageResult<()> {
        self.repository.save(self.store.list()).map_err(|e| {
            log::error!("failed to save {} items: {}", self.store.len(), e);
            e
        })
    }
}
