//! Node Identifiers
//!
//! Ids are minted by the store, never by callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, immutable identifier of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Source of fresh node ids
pub trait IdSource {
    fn next_id(&mut self) -> NodeId;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> NodeId {
        NodeId(Uuid::new_v4())
    }
}

/// Monotonic counter scoped to one session, starting at 1
///
/// Deterministic, so tests and demos can predict ids.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        self.last += 1;
        NodeId(Uuid::from_u128(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_distinct_and_ordered() {
        let mut ids = SequentialIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a.as_uuid().as_u128(), 1);
    }

    #[test]
    fn test_random_ids_do_not_collide() {
        let mut ids = RandomIds;
        let seen: HashSet<NodeId> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_display_parses_back() {
        let id = SequentialIds::new().next_id();
        let text = id.to_string();
        assert_eq!(text, "00000000-0000-0000-0000-000000000001");
        assert_eq!(text.parse::<NodeId>().unwrap(), id);
        assert!("not-a-uuid".parse::<NodeId>().is_err());
    }
}
