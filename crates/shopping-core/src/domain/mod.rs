//! Domain Layer
//!
//! Shopping list entities and input rules.
//! No dependencies beyond the standard library.

mod item;

pub use item::{is_valid_name, parse_quantity, ItemId, ShoppingItem};
