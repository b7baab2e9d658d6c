//! Drop policy: turns a drag gesture into a whole-forest transition.
//!
//! Every rule degrades to a no-op (the input forest, unchanged) instead of an
//! error; a move either applies atomically or not at all.

use crate::models::{Node, Status};
use crate::tree::{
    add_child, contains, delete, depth_of, find, find_index, insert_at, is_root, MAX_DEPTH,
};

/// Applies one drop gesture.
///
/// `target` is the node the card was released on, or `None` for a drop on an
/// empty column or the board background. `as_child` distinguishes a drop on
/// the target's body (reparent) from a drop on its header (reorder).
/// `column_status` is the status of the column receiving a targetless drop.
///
/// No-op cases: unknown source or target id, drop onto self, target inside
/// the source's own subtree, and reparenting under a node already at Task
/// depth.
pub fn apply_drop(
    forest: &[Node],
    source_id: u64,
    target: Option<u64>,
    as_child: bool,
    column_status: Option<Status>,
) -> Vec<Node> {
    let Some(source) = find(forest, source_id) else {
        return forest.to_vec();
    };

    let target_node = match target {
        Some(target_id) => {
            if target_id == source_id {
                return forest.to_vec();
            }
            match find(forest, target_id) {
                Some(node) => Some(node),
                // Stale target reference.
                None => return forest.to_vec(),
            }
        }
        None => None,
    };

    // Cycle guard: the target must not live inside the source's subtree,
    // otherwise the source would become its own ancestor.
    if let Some(target_node) = target_node {
        if contains(&source.children, target_node.id) {
            return forest.to_vec();
        }
    }

    if as_child {
        // A node at the bottom of the hierarchy cannot become a parent.
        if let Some(target_node) = target_node {
            if depth_of(forest, target_node.id) == Some(MAX_DEPTH) {
                return forest.to_vec();
            }
        }

        let moved = source.clone();
        let removed = delete(forest, source_id);
        return add_child(&removed, target_node.map(|t| t.id), &moved);
    }

    let mut moved = source.clone();

    // Moving a card next to a root card (or onto an empty column) moves it
    // between kanban columns, so it takes on the destination status.
    let root_level = match target_node {
        Some(target_node) => is_root(forest, target_node.id),
        None => true,
    };
    if root_level {
        if let Some(status) = target_node.map(|t| t.status).or(column_status) {
            moved.status = status;
        }
    }

    // Placement is decided before removal: a source that currently sits
    // before the target lands after it, and vice versa, so the card never
    // appears to jump past its old position.
    let mut above = true;
    if let Some(target_node) = target_node {
        if let (Some(source_index), Some(target_index)) = (
            find_index(forest, source_id),
            find_index(forest, target_node.id),
        ) {
            if source_index < target_index {
                above = false;
            }
        }
    }

    let removed = delete(forest, source_id);
    insert_at(&removed, target_node.map(|t| t.id), &moved, above)
}
