//! Nested Table App
//!
//! Main form, the nested table, and the child modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ChildModal, NestedTable, RowForm};
use crate::settings::TableSettings;
use crate::store::AppState;

#[component]
pub fn App(settings: TableSettings) -> impl IntoView {
    let title = settings.title.clone();

    // Provide state and settings to all children
    provide_context(Store::new(AppState::default()));
    provide_context(settings);

    view! {
        <div class="nested-table-app">
            <h2>{title}</h2>
            <RowForm />
            <NestedTable />
            <ChildModal />
        </div>
    }
}
