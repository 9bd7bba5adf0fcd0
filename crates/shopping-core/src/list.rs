//! List Manager
//!
//! Ordered in-memory collection of shopping items.

use crate::domain::{is_valid_name, parse_quantity, ItemId, ShoppingItem};

/// Items in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item carrying `id`
    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new item.
    ///
    /// Blank names are ignored and return `None`. The id is `len + 1`, so an
    /// id freed by a deletion can be handed out again.
    pub fn create(&mut self, name: &str, quantity_text: &str) -> Option<ItemId> {
        if !is_valid_name(name) {
            log::trace!("[LIST] Ignoring create with blank name");
            return None;
        }

        let id = self.items.len() as ItemId + 1;
        let item = ShoppingItem::new(id, name, parse_quantity(quantity_text));
        log::debug!("[LIST] Created item {} '{}' x{}", item.id, item.name, item.quantity);
        self.items.push(item);
        Some(id)
    }

    /// Replace name and quantity of every item with `id`.
    ///
    /// No name validation happens here. Returns the number of updated items.
    pub fn edit(&mut self, id: ItemId, name: &str, quantity_text: &str) -> usize {
        let quantity = parse_quantity(quantity_text);
        let mut updated = 0;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.name = name.to_string();
            item.quantity = quantity;
            updated += 1;
        }

        if updated == 0 {
            log::trace!("[LIST] No item {} to edit", id);
        } else {
            log::debug!("[LIST] Edited item {} -> '{}' x{} ({} match)", id, name, quantity, updated);
        }
        updated
    }

    /// Remove the first item equal to `item`. Absent items are a no-op.
    pub fn delete(&mut self, item: &ShoppingItem) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                let removed = self.items.remove(index);
                log::debug!("[LIST] Deleted item {} '{}'", removed.id, removed.name);
                true
            }
            None => {
                log::trace!("[LIST] No item matching {:?} to delete", item);
                false
            }
        }
    }
}
