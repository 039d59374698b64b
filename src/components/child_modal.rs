//! Child Modal Component
//!
//! Dialog for adding a row under an existing one. Clicking the overlay
//! cancels, like the Cancel button.

use leptos::prelude::*;

use crate::components::FieldInputs;
use crate::store::{store_cancel_form, store_submit_form, use_app_store, AppStateStoreFields};

#[component]
pub fn ChildModal() -> impl IntoView {
    let store = use_app_store();

    let parent_label = move || {
        let parent = store.form().read().modal_parent()?;
        let tree = store.tree().read();
        let node = tree.find(parent)?;
        let label = format!("Under: {} {}", node.first_name, node.last_name);
        Some(label)
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_form(&store);
    };

    view! {
        <Show when=move || store.form().read().is_modal_open()>
            <div class="overlay" on:click=move |_| store_cancel_form(&store)>
                <form
                    class="modal"
                    role="dialog"
                    aria-label="Add Nested Data"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=on_submit
                >
                    <h2>"Add Nested Data"</h2>
                    <p class="modal-parent">{parent_label}</p>
                    <FieldInputs />
                    <div class="modal-actions">
                        <button type="submit" class="btn btn-add">"Add Nested"</button>
                        <button
                            type="button"
                            class="btn btn-cancel"
                            on:click=move |_| store_cancel_form(&store)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
