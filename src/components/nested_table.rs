//! Nested Table Component
//!
//! Renders the forest as indented rows in pre-order. Collapsed rows hide
//! their descendants.

use leptos::prelude::*;
use nested_tree::Field;

use crate::components::NodeRow;
use crate::store::{use_app_store, visible_rows, AppStateStoreFields};

#[component]
pub fn NestedTable() -> impl IntoView {
    let store = use_app_store();

    let rows = move || visible_rows(&store.read());
    let is_empty = move || store.tree().read().forest().is_empty();

    view! {
        <table class="main-table">
            <thead>
                <tr>
                    {Field::ALL.into_iter().map(|field| view! { <th>{field.label()}</th> }).collect_view()}
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                // Whole row as key so edits and collapse toggles re-render
                <For
                    each=rows
                    key=|row| row.clone()
                    children=move |row| view! { <NodeRow row=row /> }
                />
            </tbody>
        </table>
        <Show when=is_empty>
            <p class="empty-hint">"No rows yet. Add one above."</p>
        </Show>
    }
}
