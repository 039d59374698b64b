//! Nested Tree
//!
//! Forest of nested person records with pure, whole-forest-returning
//! transforms, an owning store, and the form controller that drives it.

mod error;
mod id;
mod node;
mod forest;
mod store;
mod form;

pub use error::{TreeError, Result};
pub use id::{NodeId, IdSource, RandomIds, SequentialIds};
pub use node::{Node, NodeFields, Field};
pub use forest::{Forest, Row, PreOrder};
pub use store::TreeStore;
pub use form::{FormMode, Draft, FormController, Submitted};
