//! Shopping Item Entity
//!
//! A single line on the shopping list.

/// Identifier handed out at creation time.
///
/// Ids are derived from the list length, so they are not stable across
/// deletions and two items may end up sharing one.
pub type ItemId = u32;

/// A named entry with a quantity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShoppingItem {
    /// Assigned as `len + 1` when created
    pub id: ItemId,
    /// Name exactly as typed (never blank on creation)
    pub name: String,
    /// Parsed quantity, 0 when the input was not a number
    pub quantity: i32,
}

impl ShoppingItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    /// Label shown next to the name in the list row
    pub fn quantity_label(&self) -> String {
        format!("Qty: {}", self.quantity)
    }
}

/// Parse free-text quantity input.
///
/// Anything that is not a plain signed 32-bit integer (empty, padded with
/// spaces, decimals, overflow) yields 0.
pub fn parse_quantity(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(0)
}

/// Whether a name is acceptable for a new item
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
