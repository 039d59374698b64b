//! Row Form Component
//!
//! Main form: adds a root row, or updates the row being edited.

use leptos::prelude::*;

use crate::components::FieldInputs;
use crate::store::{store_cancel_form, store_submit_form, use_app_store, AppStateStoreFields};

#[component]
pub fn RowForm() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_form(&store);
    };

    view! {
        <form class="form-container" on:submit=on_submit>
            <FieldInputs />
            <button type="submit" class="btn btn-add-row">
                {move || store.form().read().main_form_label()}
            </button>
            <Show when=move || store.form().read().is_editing()>
                <button
                    type="button"
                    class="btn btn-cancel"
                    on:click=move |_| store_cancel_form(&store)
                >
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
