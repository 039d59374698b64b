//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use log::{info, warn};
use nested_tree::{FormController, FormMode, NodeFields, NodeId, Submitted, TreeStore};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The forest and its id source
    pub tree: TreeStore,
    /// Form mode and draft shared by the main form and the child modal
    pub form: FormController,
    /// Rows whose children are hidden
    pub collapsed: HashSet<NodeId>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// One rendered table row, owned so it can be keyed and diffed
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowData {
    pub id: NodeId,
    pub depth: usize,
    pub has_children: bool,
    pub collapsed: bool,
    /// Rows removed by deleting this one
    pub subtree_len: usize,
    pub fields: NodeFields,
}

/// Visible rows in display order
pub fn visible_rows(state: &AppState) -> Vec<RowData> {
    state
        .tree
        .forest()
        .rows(|id| state.collapsed.contains(&id))
        .into_iter()
        .map(|row| RowData {
            id: row.node.id,
            depth: row.depth,
            has_children: row.has_children,
            collapsed: state.collapsed.contains(&row.node.id),
            subtree_len: row.node.subtree_len(),
            fields: row.node.fields(),
        })
        .collect()
}

// ========================
// Store Helper Functions
// ========================

/// Set a draft field from a form input's `name` and value
pub fn store_set_input(store: &AppStore, name: &str, value: String) {
    if let Err(err) = store.form().write().set_named(name, value) {
        warn!("[FORM] {}", err);
    }
}

/// Commit the draft according to the current form mode
pub fn store_submit_form(store: &AppStore) {
    store.update(|state| {
        match state.form.submit(&mut state.tree) {
            Submitted::Root(id) => info!("[TABLE] Added row {}", id),
            Submitted::Child { parent, child: Some(child) } => {
                // Show the new child
                state.collapsed.remove(&parent);
                info!("[TABLE] Added row {} under {}", child, parent);
            }
            Submitted::Child { parent, child: None } => {
                warn!("[TABLE] Parent {} no longer exists, nothing added", parent);
            }
            Submitted::Updated(id) => info!("[TABLE] Updated row {}", id),
        }
    });
}

/// Load a row into the main form for editing
pub fn store_begin_edit(store: &AppStore, id: NodeId) {
    store.update(|state| {
        if let Err(err) = state.form.begin_edit(state.tree.forest(), id) {
            warn!("[FORM] {}", err);
        }
    });
}

pub fn store_open_child_modal(store: &AppStore, parent_id: NodeId) {
    store.form().write().open_child_modal(parent_id);
}

pub fn store_cancel_form(store: &AppStore) {
    store.form().write().cancel();
}

/// Delete a row with its subtree, dropping form state that pointed into it
pub fn store_delete_node(store: &AppStore, id: NodeId) {
    store.update(|state| {
        state.tree.delete(id);
        let forest = state.tree.forest();
        state.collapsed.retain(|kept| forest.contains(*kept));

        let orphaned = match state.form.mode() {
            FormMode::Editing(target) | FormMode::CreatingChild(target) => !forest.contains(target),
            FormMode::Idle | FormMode::CreatingRoot => false,
        };
        if orphaned {
            state.form.cancel();
        }
    });
}

pub fn store_toggle_collapsed(store: &AppStore, id: NodeId) {
    let field = store.collapsed();
    let mut collapsed = field.write();
    if !collapsed.remove(&id) {
        collapsed.insert(id);
    }
}
