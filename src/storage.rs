//! Browser Storage
//!
//! `KeyValueStorage` backed by `window.localStorage`.

use item_store::{KeyValueStorage, StorageError, StorageResult};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to the page's localStorage, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Backend("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Backend(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Backend("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(|e| {
            let message = js_error_message(&e);
            web_sys::console::error_1(&format!("[STORAGE] write to {:?} failed: {}", key, message).into());
            StorageError::Backend(message)
        })
    }
}

/// Readable message from a thrown JS value (DOMException, Error or string)
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
