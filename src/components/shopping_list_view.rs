//! Shopping List View Component
//!
//! Scrollable list of item rows in insertion order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShoppingListView() -> impl IntoView {
    let store = use_app_store();
    let items = Memo::new(move |_| store.screen().read().list().items().to_vec());

    view! {
        <div class="shopping-list">
            // Ids can repeat after deletions, so key on position + content
            <For
                each=move || items.get().into_iter().enumerate()
                key=|(index, item)| (*index, item.clone())
                children=move |(_, item)| view! { <ItemRow item=item /> }
            />
        </div>
    }
}
