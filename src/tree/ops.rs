//! The forest operations: find, update, delete, insert, add-child.
//!
//! All operations are total. An operation referencing an id that is absent
//! from the forest returns its input unchanged (the UI can hold stale ids
//! after concurrent edits), never an error.

use std::collections::HashSet;

use super::equality::nodes_equal;
use super::patch::NodePatch;
use crate::models::Node;

/// Depth-first pre-order search; ids are unique, so the first match is the
/// only match.
pub fn find(nodes: &[Node], id: u64) -> Option<&Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Position of the node **within its own sibling list**, found depth-first.
///
/// The returned index is local to whichever sibling list holds the node; it
/// is only meaningful for comparing the relative order of two nodes, never
/// as a global position.
pub fn find_index(nodes: &[Node], id: u64) -> Option<usize> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(index);
        }
        if let Some(child_index) = find_index(&node.children, id) {
            return Some(child_index);
        }
    }
    None
}

/// Direct parent of the node with the given id; `None` for roots and for
/// ids not present in the forest.
pub fn find_parent(nodes: &[Node], id: u64) -> Option<&Node> {
    for node in nodes {
        if node.children.iter().any(|child| child.id == id) {
            return Some(node);
        }
        if let Some(parent) = find_parent(&node.children, id) {
            return Some(parent);
        }
    }
    None
}

/// True iff a node with the given id exists anywhere in the forest.
pub fn contains(nodes: &[Node], id: u64) -> bool {
    find(nodes, id).is_some()
}

/// True iff the id names a member of the top-level sibling list.
pub fn is_root(nodes: &[Node], id: u64) -> bool {
    nodes.iter().any(|node| node.id == id)
}

/// Nesting depth of the node with the given id: roots are at depth 0.
pub fn depth_of(nodes: &[Node], id: u64) -> Option<usize> {
    fn walk(nodes: &[Node], id: u64, level: usize) -> Option<usize> {
        for node in nodes {
            if node.id == id {
                return Some(level);
            }
            if let Some(depth) = walk(&node.children, id, level + 1) {
                return Some(depth);
            }
        }
        None
    }

    walk(nodes, id, 0)
}

/// Merges `patch(node)` into every node whose id is in `ids`.
///
/// Recursion continues past a match: `ids` may name nodes at several depths.
/// A branch whose children come back structurally equal keeps its existing
/// child list instead of the rebuilt one.
pub fn update<F>(nodes: &[Node], ids: &HashSet<u64>, patch: &F) -> Vec<Node>
where
    F: Fn(&Node) -> NodePatch,
{
    nodes
        .iter()
        .map(|node| {
            let mut updated = if ids.contains(&node.id) {
                patch(node).apply(node)
            } else {
                node.clone()
            };

            let updated_children = update(&node.children, ids, patch);
            if !nodes_equal(&updated_children, &node.children) {
                updated.children = updated_children;
            }

            updated
        })
        .collect()
}

/// Applies one static patch to every node in the forest.
pub fn update_all(nodes: &[Node], patch: &NodePatch) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| {
            let mut updated = patch.apply(node);
            updated.children = update_all(&node.children, patch);
            updated
        })
        .collect()
}

/// Removes the node with the given id together with its whole subtree.
/// Siblings close up; every other branch is carried over unchanged.
pub fn delete(nodes: &[Node], id: u64) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| node.id != id)
        .map(|node| {
            let remaining = delete(&node.children, id);
            if nodes_equal(&remaining, &node.children) {
                node.clone()
            } else {
                let mut updated = node.clone();
                updated.children = remaining;
                updated
            }
        })
        .collect()
}

/// Appends `new_node` to the children of `parent`, or to the root list when
/// `parent` is `None`.
///
/// A `Some` parent that is not present in the forest leaves the forest
/// unchanged.
pub fn add_child(nodes: &[Node], parent: Option<u64>, new_node: &Node) -> Vec<Node> {
    let Some(parent_id) = parent else {
        let mut roots = nodes.to_vec();
        roots.push(new_node.clone());
        return roots;
    };

    nodes
        .iter()
        .map(|node| {
            if node.id == parent_id {
                let mut updated = node.clone();
                updated.children.push(new_node.clone());
                return updated;
            }

            let added = add_child(&node.children, parent, new_node);
            if nodes_equal(&added, &node.children) {
                node.clone()
            } else {
                let mut updated = node.clone();
                updated.children = added;
                updated
            }
        })
        .collect()
}

/// Splices `new_node` into the sibling list containing `target`, before it
/// when `above` is true and after it otherwise. Depth never changes.
///
/// A `None` target appends to the root list regardless of `above`.
pub fn insert_at(nodes: &[Node], target: Option<u64>, new_node: &Node, above: bool) -> Vec<Node> {
    let Some(target_id) = target else {
        let mut roots = nodes.to_vec();
        roots.push(new_node.clone());
        return roots;
    };

    if let Some(index) = nodes.iter().position(|node| node.id == target_id) {
        let mut siblings = nodes.to_vec();
        siblings.insert(if above { index } else { index + 1 }, new_node.clone());
        return siblings;
    }

    nodes
        .iter()
        .map(|node| {
            let inserted = insert_at(&node.children, target, new_node, above);
            if nodes_equal(&inserted, &node.children) {
                node.clone()
            } else {
                let mut updated = node.clone();
                updated.children = inserted;
                updated
            }
        })
        .collect()
}
