//! UI Components
//!
//! Thin Leptos view over the tree store.

mod field_inputs;
mod row_form;
mod nested_table;
mod node_row;
mod child_modal;
mod delete_confirm_button;

pub use field_inputs::FieldInputs;
pub use row_form::RowForm;
pub use nested_table::NestedTable;
pub use node_row::NodeRow;
pub use child_modal::ChildModal;
pub use delete_confirm_button::DeleteConfirmButton;
