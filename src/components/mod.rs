//! UI Components
//!
//! Leptos components for the shopping list screen.

mod item_row;
mod item_dialog;
mod shopping_list_view;

pub use item_row::ItemRow;
pub use item_dialog::ItemDialog;
pub use shopping_list_view::ShoppingListView;
