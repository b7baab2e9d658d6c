//! Id allocation for newly created nodes.
//!
//! The allocator is injected into the board controller instead of living in
//! module-level mutable state, so tests can pin the exact id sequence.

use super::Node;

/// Capability for minting fresh node ids.
///
/// Ids must be unique across the whole forest and are never reused while the
/// node they name is still present.
pub trait IdAllocator {
    fn next(&mut self) -> u64;
}

/// Monotonically increasing allocator.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    /// Starts just above the highest id already present in the forest.
    pub fn from_forest(forest: &[Node]) -> Self {
        fn max_id(nodes: &[Node]) -> u64 {
            nodes
                .iter()
                .map(|n| n.id.max(max_id(&n.children)))
                .max()
                .unwrap_or(0)
        }

        Self {
            next: max_id(forest) + 1,
        }
    }
}

impl IdAllocator for SequentialIds {
    fn next(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeKind, Status};

    #[test]
    fn test_sequential_ids_advance() {
        let mut ids = SequentialIds::new(7);
        assert_eq!(ids.next(), 7);
        assert_eq!(ids.next(), 8);
        assert_eq!(ids.next(), 9);
    }

    #[test]
    fn test_from_forest_starts_above_max() {
        let mut root = Node::new(3, "root", NodeKind::Feature, Status::Backlog);
        root.children
            .push(Node::new(41, "child", NodeKind::UserStory, Status::ToDo));

        let mut ids = SequentialIds::from_forest(&[root]);
        assert_eq!(ids.next(), 42);
    }

    #[test]
    fn test_from_empty_forest() {
        let mut ids = SequentialIds::from_forest(&[]);
        assert_eq!(ids.next(), 1);
    }
}
