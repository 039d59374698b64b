//! Tree Store
//!
//! Owns the forest and the id source. Each mutation builds the next forest
//! from the current one and swaps it in with a single assignment.

use log::{debug, trace};

use crate::forest::Forest;
use crate::id::{IdSource, NodeId, RandomIds};
use crate::node::{Node, NodeFields};

#[derive(Debug, Clone, Default)]
pub struct TreeStore<I: IdSource = RandomIds> {
    forest: Forest,
    ids: I,
}

impl TreeStore<RandomIds> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource> TreeStore<I> {
    pub fn with_ids(ids: I) -> Self {
        Self { forest: Forest::new(), ids }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.forest.find(id)
    }

    /// Append a new root and return its id
    pub fn insert_root(&mut self, fields: NodeFields) -> NodeId {
        let id = self.ids.next_id();
        self.forest = self.forest.with_root(Node::leaf(id, fields));
        debug!("insert_root: {} ({} roots)", id, self.forest.roots().len());
        id
    }

    /// Replace the fields of `id`. No-op when `id` is absent.
    pub fn update(&mut self, id: NodeId, fields: NodeFields) {
        if !self.forest.contains(id) {
            debug!("update: no node {}, forest unchanged", id);
            return;
        }
        self.forest = self.forest.updated(id, &fields);
        trace!("update: {} -> {:?}", id, fields);
    }

    /// Remove `id` and its subtree. No-op when `id` is absent.
    pub fn delete(&mut self, id: NodeId) {
        let Some(node) = self.forest.find(id) else {
            debug!("delete: no node {}, forest unchanged", id);
            return;
        };
        let removed = node.subtree_len();
        self.forest = self.forest.without(id);
        debug!("delete: {} ({} nodes removed)", id, removed);
    }

    /// Append a new child under `parent_id` and return its id.
    /// Returns `None`, minting no id, when the parent is absent.
    pub fn insert_child(&mut self, parent_id: NodeId, fields: NodeFields) -> Option<NodeId> {
        if !self.forest.contains(parent_id) {
            debug!("insert_child: no parent {}, forest unchanged", parent_id);
            return None;
        }
        let id = self.ids.next_id();
        self.forest = self.forest.with_child(parent_id, Node::leaf(id, fields));
        debug!("insert_child: {} under {}", id, parent_id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;

    fn store() -> TreeStore<SequentialIds> {
        TreeStore::with_ids(SequentialIds::new())
    }

    fn named(first: &str) -> NodeFields {
        NodeFields::new(first, "", "")
    }

    #[test]
    fn test_insert_root_keeps_call_order() {
        let mut store = store();
        let ids: Vec<_> = ["A", "B", "C"].iter().map(|n| store.insert_root(named(n))).collect();

        let roots = store.forest().roots();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots.iter().map(|n| n.id).collect::<Vec<_>>(), ids);
        assert_eq!(roots[2].first_name, "C");
        assert!(roots.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_child_removed_with_parent() {
        let mut store = store();
        let root = store.insert_root(named("A"));
        let child = store.insert_child(root, named("B")).unwrap();
        assert_eq!(store.find(child).unwrap().first_name, "B");

        store.delete(root);
        assert!(store.forest().is_empty());
        assert!(store.find(child).is_none());
    }

    #[test]
    fn test_update_leaves_sibling_alone() {
        let mut store = store();
        let x = store.insert_root(named("X"));
        let y = store.insert_root(named("Y"));

        store.update(x, named("Z"));
        assert_eq!(store.find(x).unwrap().first_name, "Z");
        assert_eq!(store.find(y).unwrap().first_name, "Y");
    }

    #[test]
    fn test_update_keeps_children() {
        let mut store = store();
        let root = store.insert_root(named("A"));
        let child = store.insert_child(root, named("B")).unwrap();

        store.update(root, NodeFields::new("A2", "Last", "Desc"));
        let node = store.find(root).unwrap();
        assert_eq!(node.id, root);
        assert_eq!(node.last_name, "Last");
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].id, child);
    }

    #[test]
    fn test_deep_insert_and_delete_counts() {
        let mut store = store();
        let root = store.insert_root(named("r"));
        let a = store.insert_child(root, named("a")).unwrap();
        let b = store.insert_child(a, named("b")).unwrap();
        store.insert_child(b, named("c")).unwrap();
        store.insert_child(root, named("d")).unwrap();
        assert_eq!(store.forest().len(), 5);

        let removed = store.find(a).unwrap().subtree_len();
        store.delete(a);
        assert_eq!(removed, 3);
        assert_eq!(store.forest().len(), 2);
        assert!(store.find(b).is_none());
    }

    #[test]
    fn test_missing_ids_are_silent_no_ops() {
        let mut store = store();
        let root = store.insert_root(named("A"));
        let before = store.forest().clone();

        let mut other = SequentialIds::new();
        for _ in 0..10 {
            other.next_id();
        }
        let ghost = other.next_id();

        store.update(ghost, named("nope"));
        store.delete(ghost);
        assert_eq!(store.insert_child(ghost, named("orphan")), None);
        assert_eq!(store.forest(), &before);

        // A failed child insert does not consume an id
        let next = store.insert_root(named("B"));
        assert_eq!(next.as_uuid().as_u128(), root.as_uuid().as_u128() + 1);
    }

    #[test]
    fn test_find_reflects_last_mutation() {
        let mut store = store();
        let id = store.insert_root(named("v1"));
        store.update(id, named("v2"));
        store.update(id, named("v3"));
        assert_eq!(store.find(id).unwrap().first_name, "v3");
        store.delete(id);
        assert!(store.find(id).is_none());
    }

    #[test]
    fn test_ids_unique_across_depths() {
        use std::collections::HashSet;

        let mut store = TreeStore::new();
        let root = store.insert_root(named("r"));
        for i in 0..20 {
            let child = store.insert_child(root, named(&i.to_string())).unwrap();
            store.insert_child(child, named("leaf"));
        }
        let seen: HashSet<_> = store.forest().iter().map(|(_, n)| n.id).collect();
        assert_eq!(seen.len(), store.forest().len());
    }
}
