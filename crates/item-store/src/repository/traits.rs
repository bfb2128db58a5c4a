//! Repository Layer - Core Traits
//!
//! Defines the key-value interface the persistence bridge writes through.
//! Implementations can use browser localStorage, in-memory maps, etc.

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The storage backend refused the operation (unavailable, quota exceeded, ...)
    Backend(String),
    /// The stored value could not be parsed
    Corrupt(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Backend(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Stored data is corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Synchronous string key-value storage (the shape of `window.localStorage`)
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if the slot is empty
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }
}
