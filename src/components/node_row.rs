//! Node Row Component
//!
//! A single table row with Add Nested / Edit / Delete actions.

use leptos::prelude::*;
use nested_tree::NodeFields;

use crate::components::DeleteConfirmButton;
use crate::settings::TableSettings;
use crate::store::{
    store_begin_edit, store_delete_node, store_open_child_modal, store_toggle_collapsed,
    use_app_store, RowData,
};

#[component]
pub fn NodeRow(row: RowData) -> impl IntoView {
    let store = use_app_store();
    let settings = expect_context::<TableSettings>();

    let RowData { id, depth, has_children, collapsed, subtree_len, fields } = row;
    let NodeFields { first_name, last_name, description } = fields;
    let indent = depth as u32 * settings.indent_px;
    let row_class = if depth == 0 { "row root-row" } else { "row nested-row" };

    let toggle = if has_children {
        view! {
            <button class="collapse-btn" on:click=move |_| store_toggle_collapsed(&store, id)>
                {if collapsed { "▶" } else { "▼" }}
            </button>
        }
        .into_any()
    } else {
        view! { <span class="collapse-placeholder">"·"</span> }.into_any()
    };

    let delete = if settings.confirm_delete {
        view! {
            <DeleteConfirmButton
                rows=subtree_len
                on_confirm=move |_: ()| store_delete_node(&store, id)
            />
        }
        .into_any()
    } else {
        view! {
            <button class="btn btn-delete" on:click=move |_| store_delete_node(&store, id)>
                "Delete"
            </button>
        }
        .into_any()
    };

    view! {
        <tr class=row_class>
            <td class="name-cell" style=format!("padding-left: {}px;", indent + 8)>
                {toggle}
                <span class="cell-text">{first_name}</span>
            </td>
            <td>{last_name}</td>
            <td>{description}</td>
            <td class="actions">
                <button class="btn btn-add" on:click=move |_| store_open_child_modal(&store, id)>
                    "Add Nested"
                </button>
                <button class="btn btn-edit" on:click=move |_| store_begin_edit(&store, id)>
                    "Edit"
                </button>
                {delete}
            </td>
        </tr>
    }
}
