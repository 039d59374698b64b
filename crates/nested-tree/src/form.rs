//! Form Controller
//!
//! Tracks what the next submit will do and the field values typed so far.
//! The mode is one enum so that, for example, editing a node and adding a
//! child cannot both be in progress.

use log::debug;

use crate::error::{Result, TreeError};
use crate::forest::Forest;
use crate::id::{IdSource, NodeId};
use crate::node::{Field, NodeFields};
use crate::store::TreeStore;

/// Intent of the next submit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Nothing typed yet; a submit still creates a root
    #[default]
    Idle,
    CreatingRoot,
    /// Child modal is open for this parent
    CreatingChild(NodeId),
    /// Main form is pre-filled from this node
    Editing(NodeId),
}

/// Uncommitted field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub fields: NodeFields,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field)
    }
}

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Root(NodeId),
    /// `child` is `None` when the parent vanished before submit
    Child { parent: NodeId, child: Option<NodeId> },
    Updated(NodeId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    mode: FormMode,
    draft: Draft,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.mode, FormMode::CreatingChild(_))
    }

    /// Parent the modal is adding under, if open
    pub fn modal_parent(&self) -> Option<NodeId> {
        match self.mode {
            FormMode::CreatingChild(parent) => Some(parent),
            _ => None,
        }
    }

    pub fn main_form_label(&self) -> &'static str {
        if self.is_editing() { "Update Row" } else { "Add Row" }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.fields.set(field, value);
        if self.mode == FormMode::Idle {
            self.mode = FormMode::CreatingRoot;
        }
    }

    /// Set a field by its input name (`firstName`, `lastName`, `description`)
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Open the child modal with an empty draft, dropping any edit in progress
    pub fn open_child_modal(&mut self, parent_id: NodeId) {
        if let FormMode::Editing(id) = self.mode {
            debug!("form: abandoning edit of {} to add under {}", id, parent_id);
        }
        self.draft = Draft::default();
        self.mode = FormMode::CreatingChild(parent_id);
    }

    /// Pre-fill the draft from node `id` and switch to editing
    pub fn begin_edit(&mut self, forest: &Forest, id: NodeId) -> Result<()> {
        let node = forest.find(id).ok_or(TreeError::NotFound(id))?;
        self.draft = Draft { fields: node.fields() };
        self.mode = FormMode::Editing(id);
        Ok(())
    }

    /// Apply the draft to `store` according to the mode, then reset
    pub fn submit<I: IdSource>(&mut self, store: &mut TreeStore<I>) -> Submitted {
        let fields = std::mem::take(&mut self.draft).fields;
        let submitted = match std::mem::take(&mut self.mode) {
            FormMode::Idle | FormMode::CreatingRoot => Submitted::Root(store.insert_root(fields)),
            FormMode::CreatingChild(parent) => Submitted::Child {
                parent,
                child: store.insert_child(parent, fields),
            },
            FormMode::Editing(id) => {
                store.update(id, fields);
                Submitted::Updated(id)
            }
        };
        debug!("form: submitted {:?}", submitted);
        submitted
    }

    /// Discard the draft and return to idle
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}
