//! Item Dialog Component
//!
//! Modal form used for both adding and editing an item. Confirm creates or
//! edits depending on the form mode; the backdrop behaves like Cancel.

use leptos::prelude::*;

use crate::store::{
    store_cancel_form, store_confirm_form, store_set_name_input, store_set_quantity_input,
    use_app_store, AppStateStoreFields,
};

const DIALOG_TITLE: &str = "Add shopping item";

#[component]
pub fn ItemDialog() -> impl IntoView {
    let store = use_app_store();

    let visible = move || store.screen().read().form().visible;
    let name_input = move || store.screen().read().form().name_input.clone();
    let quantity_input = move || store.screen().read().form().quantity_input.clone();

    view! {
        <Show when=visible>
            <div class="dialog-backdrop" on:click=move |_| store_cancel_form(&store)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">{DIALOG_TITLE}</h2>

                    <div class="dialog-body">
                        <input
                            type="text"
                            class="dialog-input"
                            placeholder="Name"
                            prop:value=name_input
                            on:input=move |ev| store_set_name_input(&store, event_target_value(&ev))
                        />
                        <input
                            type="text"
                            inputmode="numeric"
                            class="dialog-input"
                            placeholder="Quantity"
                            prop:value=quantity_input
                            on:input=move |ev| store_set_quantity_input(&store, event_target_value(&ev))
                        />
                    </div>

                    <div class="dialog-actions">
                        <button class="confirm-btn" on:click=move |_| store_confirm_form(&store)>
                            "Add"
                        </button>
                        <button class="cancel-btn" on:click=move |_| store_cancel_form(&store)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
