//! Item Entity
//!
//! A single named record with a unique integer id.

use serde::{Deserialize, Serialize};

/// A named list entry
///
/// Serialized as `{"id": 1, "name": "Milk"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within the collection
    pub id: u32,
    /// Display name as typed by the user
    pub name: String,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Whether a name would be rejected when adding (empty or whitespace only)
    pub fn is_blank_name(name: &str) -> bool {
        name.trim().is_empty()
    }
}
