//! Shopping List App
//!
//! Single screen: "Add Item" button, the list, and the item dialog.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemDialog, ShoppingListView};
use crate::settings;
use crate::store::{store_open_create_form, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let settings = settings::load_settings();
    let store = Store::new(AppState::new(settings));

    // Provide the store to all children
    provide_context(store);

    let item_count = move || store.screen().read().list().len();

    view! {
        <div class="app-layout">
            <main class="main-content">
                <button
                    class="add-item-btn"
                    on:click=move |_| store_open_create_form(&store)
                >
                    "Add Item"
                </button>

                <ShoppingListView />

                <p class="item-count">{move || format!("{} items", item_count())}</p>
            </main>

            <ItemDialog />
        </div>
    }
}
