//! Shopping List Core
//!
//! Layered like the UI expects it:
//! - domain: item entity and input rules
//! - list: ordered in-memory list manager
//! - form / screen: dialog state and the user actions driving it
//! - settings: dialog behavior switches

pub mod domain;
pub mod form;
pub mod list;
pub mod screen;
pub mod settings;

pub use domain::{ItemId, ShoppingItem};
pub use form::{FormMode, ItemForm};
pub use list::ShoppingList;
pub use screen::ShoppingScreen;
pub use settings::{FormSettings, SettingsError, SettingsResult};
