//! Structural equality used for minimal-update propagation.

use crate::models::Node;

/// Deep positional equality of two sibling sequences.
///
/// Sequences are equal iff they have the same length and corresponding nodes
/// carry identical scalar fields and recursively equal children. Ids are
/// deliberately ignored: the comparison is only ever made between a subtree
/// and its own pre-mutation version at the same path, so position, not
/// identity, is what matters.
pub fn nodes_equal(a: &[Node], b: &[Node]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    for (left, right) in a.iter().zip(b.iter()) {
        if left.name != right.name
            || left.kind != right.kind
            || left.status != right.status
            || left.description != right.description
            || left.start_date != right.start_date
            || left.end_date != right.end_date
            || left.expanded != right.expanded
        {
            return false;
        }

        if !nodes_equal(&left.children, &right.children) {
            return false;
        }
    }

    true
}
