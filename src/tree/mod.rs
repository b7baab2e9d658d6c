//! Pure tree algebra over the board forest.
//!
//! Every operation borrows an immutable forest slice and returns a fresh
//! `Vec<Node>`; inputs are never mutated. Branches the operation does not
//! touch are carried over unchanged, with [`nodes_equal`] as the sole check
//! deciding whether a branch must be rebuilt, so downstream change detection
//! can skip unaffected subtrees.

mod equality;
mod ops;
mod patch;

#[cfg(test)]
mod tests;

pub use equality::nodes_equal;
pub use ops::{
    add_child, contains, delete, depth_of, find, find_index, find_parent, insert_at, is_root,
    update, update_all,
};
pub use patch::NodePatch;

/// Deepest level a node can occupy: Feature (0) → User Story (1) → Task (2).
pub const MAX_DEPTH: usize = 2;
