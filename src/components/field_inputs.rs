//! Field Inputs Component
//!
//! The three draft inputs shared by the main form and the child modal.

use leptos::prelude::*;
use nested_tree::Field;

use crate::store::{store_set_input, use_app_store, AppStateStoreFields};

#[component]
pub fn FieldInputs() -> impl IntoView {
    let store = use_app_store();

    Field::ALL
        .into_iter()
        .map(move |field| {
            view! {
                <input
                    class="input-field"
                    type="text"
                    name=field.name()
                    placeholder=field.label()
                    prop:value=move || store.form().read().draft().get(field).to_string()
                    on:input=move |ev| {
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        store_set_input(&store, &input.name(), input.value());
                    }
                />
            }
        })
        .collect_view()
}
