//! Store Configuration

use serde::Deserialize;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "items";

/// Settings for the persistence bridge
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key of the single slot holding the serialized collection
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}
