//! Node Model
//!
//! One record of the table and the child records nested under it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::id::NodeId;

/// Editable values of a node, without identity or children
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeFields {
    pub first_name: String,
    pub last_name: String,
    pub description: String,
}

impl NodeFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            description: description.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }
}

/// A record in the tree
///
/// Each node exclusively owns its children; there are no back-references,
/// so the structure cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    /// Ordered by insertion
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Fresh leaf node
    pub fn leaf(id: NodeId, fields: NodeFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            description: fields.description,
            children: Vec::new(),
        }
    }

    pub fn fields(&self) -> NodeFields {
        NodeFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            description: self.description.clone(),
        }
    }

    /// Same id and children, new field values
    pub fn with_fields(&self, fields: NodeFields) -> Self {
        Self {
            id: self.id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            description: fields.description,
            children: self.children.clone(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes strictly below this one
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(Node::subtree_len).sum()
    }

    /// This node plus all of its descendants
    pub fn subtree_len(&self) -> usize {
        1 + self.descendant_count()
    }
}

/// Field selector keyed by form input name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::Description];

    /// Input `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Description => "description",
        }
    }

    /// Placeholder / column header
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Description => "Description",
        }
    }
}

impl FromStr for Field {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Field::FirstName),
            "lastName" => Ok(Field::LastName),
            "description" => Ok(Field::Description),
            other => Err(TreeError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{IdSource, SequentialIds};

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "middleName".parse::<Field>(),
            Err(TreeError::UnknownField("middleName".to_string()))
        );
    }

    #[test]
    fn test_with_fields_keeps_id_and_children() {
        let mut ids = SequentialIds::new();
        let mut parent = Node::leaf(ids.next_id(), NodeFields::new("A", "", ""));
        parent.children.push(Node::leaf(ids.next_id(), NodeFields::new("B", "", "")));

        let edited = parent.with_fields(NodeFields::new("Z", "Last", "desc"));
        assert_eq!(edited.id, parent.id);
        assert_eq!(edited.children, parent.children);
        assert_eq!(edited.fields(), NodeFields::new("Z", "Last", "desc"));
    }

    #[test]
    fn test_subtree_counts() {
        let mut ids = SequentialIds::new();
        let mut root = Node::leaf(ids.next_id(), NodeFields::default());
        let mut child = Node::leaf(ids.next_id(), NodeFields::default());
        child.children.push(Node::leaf(ids.next_id(), NodeFields::default()));
        root.children.push(child);
        root.children.push(Node::leaf(ids.next_id(), NodeFields::default()));

        assert_eq!(root.descendant_count(), 3);
        assert_eq!(root.subtree_len(), 4);
        assert!(root.has_children());
    }

    #[test]
    fn test_serialized_shape() {
        let id = SequentialIds::new().next_id();
        let node = Node::leaf(id, NodeFields::new("Ada", "Lovelace", "analyst"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["children"], serde_json::json!([]));

        // Missing children reads as empty
        let parsed: Node = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","firstName":"Ada","lastName":"Lovelace","description":"analyst"}"#,
        )
        .unwrap();
        assert_eq!(parsed, node);
    }
}
