//! Item Collection
//!
//! Insertion-ordered items, unique by id.

use std::collections::HashSet;

use super::item::Item;

/// In-memory ordered collection of items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded sequence.
    ///
    /// Later entries repeating an earlier id are dropped.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let mut unique = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id) {
                unique.push(item);
            } else {
                log::warn!("dropping item with duplicate id {} ({:?})", item.id, item.name);
            }
        }
        Self { items: unique }
    }

    /// Id the next added item will receive: max existing id + 1, or 1 when empty.
    ///
    /// `None` once `u32::MAX` is taken.
    pub fn next_id(&self) -> Option<u32> {
        match self.items.iter().map(|item| item.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a new item. Blank names are a no-op.
    pub fn add(&mut self, name: &str) -> Option<Item> {
        if Item::is_blank_name(name) {
            return None;
        }
        let Some(id) = self.next_id() else {
            log::warn!("item id space exhausted, ignoring add of {:?}", name);
            return None;
        };
        let item = Item::new(id, name);
        self.items.push(item.clone());
        log::debug!("added item {}", id);
        Some(item)
    }

    /// Remove the item with `id`, returning it if it was present
    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        log::debug!("removed item {}", id);
        Some(self.items.remove(index))
    }

    /// Overwrite the name of the item with `id` in place
    pub fn replace(&mut self, id: u32, new_name: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = new_name.to_string();
                log::debug!("renamed item {}", id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Items in insertion order
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
