//! Item Row Component
//!
//! Single shopping item with edit and delete buttons.

use leptos::prelude::*;
use shopping_core::ShoppingItem;

use crate::store::{store_delete_item, store_open_edit_form, use_app_store};

/// A single item row in the list
#[component]
pub fn ItemRow(item: ShoppingItem) -> impl IntoView {
    let store = use_app_store();

    let name = item.name.clone();
    let quantity = item.quantity_label();
    let edit_target = item.clone();
    let delete_target = item;

    view! {
        <div class="item-row">
            <span class="item-name">{name}</span>
            <span class="item-quantity">{quantity}</span>

            <div class="item-actions">
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| store_open_edit_form(&store, &edit_target)
                >
                    "✎"
                </button>
                // Deletes immediately, no confirmation step
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |_| store_delete_item(&store, &delete_target)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
