//! Application State Store
//!
//! Uses Leptos reactive_stores so components re-render from the screen state.
//! Components go through the helpers below instead of writing the screen.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::{FormSettings, ShoppingItem, ShoppingScreen};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Shopping list and its dialog
    pub screen: ShoppingScreen,
}

impl AppState {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            screen: ShoppingScreen::new(settings),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_open_create_form(store: &AppStore) {
    store.screen().write().open_create_form();
}

pub fn store_open_edit_form(store: &AppStore, item: &ShoppingItem) {
    store.screen().write().open_edit_form(item);
}

pub fn store_set_name_input(store: &AppStore, text: String) {
    store.screen().write().set_name_input(text);
}

pub fn store_set_quantity_input(store: &AppStore, text: String) {
    store.screen().write().set_quantity_input(text);
}

pub fn store_confirm_form(store: &AppStore) {
    store.screen().write().confirm_form();
}

/// Cancel button and backdrop click
pub fn store_cancel_form(store: &AppStore) {
    store.screen().write().cancel_form();
}

pub fn store_delete_item(store: &AppStore, item: &ShoppingItem) {
    store.screen().write().delete_item(item);
}
