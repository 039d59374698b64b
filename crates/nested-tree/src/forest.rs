//! Forest Transforms
//!
//! Ordered roots plus the recursive walks over them. Every transform borrows
//! the current forest and returns a new one; existing nodes are never touched,
//! so comparing old and new values is enough to detect a change.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::node::{Node, NodeFields};

/// Ordered sequence of root nodes
///
/// Walks recurse once per level, so very deep chains (a few thousand levels)
/// can exhaust the thread stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<Node>,
}

/// One visible line of the nested table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub depth: usize,
    pub node: &'a Node,
    pub has_children: bool,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    /// Append a root at the end
    pub fn with_root(&self, node: Node) -> Forest {
        let mut roots = self.roots.clone();
        roots.push(node);
        Forest { roots }
    }

    /// Replace the fields of the node with `id`, keeping its id and children.
    /// Unchanged when no node matches.
    pub fn updated(&self, id: NodeId, fields: &NodeFields) -> Forest {
        Forest { roots: update_in(&self.roots, id, fields) }
    }

    /// Drop the node with `id` together with its subtree.
    /// Unchanged when no node matches.
    pub fn without(&self, id: NodeId) -> Forest {
        Forest { roots: remove_in(&self.roots, id) }
    }

    /// Append `child` to the children of `parent_id`.
    /// Unchanged when no node matches.
    pub fn with_child(&self, parent_id: NodeId, child: Node) -> Forest {
        Forest { roots: insert_in(&self.roots, parent_id, &child) }
    }

    /// First node with `id` in pre-order
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Pre-order walk yielding `(depth, node)`
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.roots)
    }

    /// Flatten into display rows in pre-order, hiding the descendants of
    /// every node for which `is_collapsed` returns true.
    pub fn rows<F>(&self, is_collapsed: F) -> Vec<Row<'_>>
    where
        F: Fn(NodeId) -> bool,
    {
        fn collect<'a, F: Fn(NodeId) -> bool>(
            nodes: &'a [Node],
            depth: usize,
            is_collapsed: &F,
            result: &mut Vec<Row<'a>>,
        ) {
            for node in nodes {
                result.push(Row { depth, node, has_children: node.has_children() });
                if !is_collapsed(node.id) {
                    collect(&node.children, depth + 1, is_collapsed, result);
                }
            }
        }

        let mut result = Vec::new();
        collect(&self.roots, 0, &is_collapsed, &mut result);
        result
    }
}

/// Depth-first pre-order iterator over a forest
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> PreOrder<'a> {
    fn new(roots: &'a [Node]) -> Self {
        Self { stack: roots.iter().rev().map(|n| (0, n)).collect() }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

fn rebuilt(node: &Node, children: Vec<Node>) -> Node {
    Node {
        id: node.id,
        first_name: node.first_name.clone(),
        last_name: node.last_name.clone(),
        description: node.description.clone(),
        children,
    }
}

fn update_in(nodes: &[Node], id: NodeId, fields: &NodeFields) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| {
            if node.id == id {
                node.with_fields(fields.clone())
            } else {
                rebuilt(node, update_in(&node.children, id, fields))
            }
        })
        .collect()
}

fn remove_in(nodes: &[Node], id: NodeId) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| node.id != id)
        .map(|node| rebuilt(node, remove_in(&node.children, id)))
        .collect()
}

fn insert_in(nodes: &[Node], parent_id: NodeId, child: &Node) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| {
            let mut children = insert_in(&node.children, parent_id, child);
            if node.id == parent_id {
                children.push(child.clone());
            }
            rebuilt(node, children)
        })
        .collect()
}

fn find_in(nodes: &[Node], id: NodeId) -> Option<&Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, id) {
            return Some(found);
        }
    }
    None
}
