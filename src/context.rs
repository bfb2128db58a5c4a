//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use item_store::{Item, ItemController, StorageError, ViewMode};

use crate::storage::BrowserStorage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Collection, persistence and form mode
    controller: RwSignal<ItemController<BrowserStorage>>,
    /// Items in display order - read
    pub items: Memo<Vec<Item>>,
    /// Which form is shown - read
    pub mode: Memo<ViewMode>,
    /// Storage problem shown in the banner - read
    pub error: ReadSignal<Option<String>>,
    /// Storage problem shown in the banner - write
    set_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        controller: RwSignal<ItemController<BrowserStorage>>,
        error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            controller,
            items: Memo::new(move |_| controller.with(|c| c.items().to_vec())),
            mode: Memo::new(move |_| controller.with(|c| c.mode())),
            error: error.0,
            set_error: error.1,
        }
    }

    /// Current item with `id`, without subscribing to changes
    pub fn item_untracked(&self, id: u32) -> Option<Item> {
        self.controller
            .with_untracked(|c| c.items().iter().find(|item| item.id == id).cloned())
    }

    /// Add an item. Returns false when the name was rejected.
    pub fn add_item(&self, name: &str) -> bool {
        match self.controller.try_update(|c| c.add(name)) {
            Some(Ok(Some(item))) => {
                web_sys::console::log_1(&format!("[APP] Added item #{}", item.id).into());
                true
            }
            Some(Ok(None)) | None => false,
            Some(Err(e)) => {
                self.report(&e);
                true
            }
        }
    }

    pub fn delete_item(&self, id: u32) {
        if let Some(Err(e)) = self.controller.try_update(|c| c.remove(id)) {
            self.report(&e);
        }
    }

    /// Show the edit form for `id`
    pub fn begin_edit(&self, id: u32) {
        self.controller.update(|c| {
            c.begin_edit(id);
        });
    }

    /// Apply the edit form and go back to the add form
    pub fn submit_edit(&self, name: &str) {
        if let Some(Err(e)) = self.controller.try_update(|c| c.submit_edit(name)) {
            self.report(&e);
        }
    }

    pub fn cancel_edit(&self) {
        self.controller.update(|c| c.cancel_edit());
    }

    pub fn dismiss_error(&self) {
        self.set_error.set(None);
    }

    fn report(&self, error: &StorageError) {
        web_sys::console::error_1(&format!("[APP] {}", error).into());
        self.set_error.set(Some(describe_storage_error(error)));
    }
}

/// Banner text for a storage failure
pub fn describe_storage_error(error: &StorageError) -> String {
    match error {
        StorageError::Corrupt(_) => {
            format!("Saved items could not be read and the list started empty. ({})", error)
        }
        StorageError::Backend(_) => {
            format!("Changes could not be saved and will be lost on reload. ({})", error)
        }
    }
}
