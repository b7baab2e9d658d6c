//! Board state: the forest, the drag gesture, and the fixed set of user
//! operations.
//!
//! [`BoardController`] is the single capability object handed to every
//! consumer of the board. It owns the one shared mutable value, the current
//! forest, and replaces it wholesale on each completed operation, so readers
//! always observe one consistent version.

mod columns;
mod policy;


pub use columns::{columns, Column};
pub use policy::apply_drop;

use std::collections::HashSet;

use tracing::debug;

use crate::models::{IdAllocator, Node, NodeKind, Status};
use crate::tree::{delete, find, update, NodePatch};

/// Drag gesture state. Single slot: starting a new drag overwrites any drag
/// already in flight, and a drag that never sees a drop leaves the forest
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(u64),
}

/// Owns the forest and exposes the board operations: toggle, edit, delete,
/// add, select, drag-start, drop.
pub struct BoardController {
    forest: Vec<Node>,
    drag: DragState,
    selected: Option<u64>,
    ids: Box<dyn IdAllocator>,
}

impl BoardController {
    pub fn new(forest: Vec<Node>, ids: Box<dyn IdAllocator>) -> Self {
        Self {
            forest,
            drag: DragState::Idle,
            selected: None,
            ids,
        }
    }

    /// The current forest version.
    pub fn forest(&self) -> &[Node] {
        &self.forest
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Flips the expand/collapse flag of one node.
    pub fn toggle(&mut self, id: u64) {
        self.forest = update(&self.forest, &HashSet::from([id]), &|node: &Node| {
            NodePatch::expanded(!node.expanded)
        });
    }

    /// Merges an edit patch into the node with the given id. Unknown ids are
    /// a no-op.
    pub fn edit(&mut self, id: u64, patch: NodePatch) {
        self.forest = update(&self.forest, &HashSet::from([id]), &|_| patch.clone());
    }

    /// Removes a node and its whole subtree.
    pub fn delete(&mut self, id: u64) {
        self.forest = delete(&self.forest, id);
    }

    /// Creates a node with a freshly allocated id under `parent`, or as a
    /// new root when `parent` is `None`. Returns the new id.
    pub fn add(
        &mut self,
        parent: Option<u64>,
        name: impl Into<String>,
        kind: NodeKind,
        status: Status,
    ) -> u64 {
        let id = self.ids.next();
        let mut node = Node::new(id, name, kind, status);
        node.expanded = true;
        self.forest = crate::tree::add_child(&self.forest, parent, &node);
        id
    }

    /// Opens the detail view on a node; selecting the selected node again
    /// closes it.
    pub fn select(&mut self, id: u64) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// The currently selected node, re-resolved against the latest forest so
    /// edits are visible and a deleted node yields `None`.
    pub fn selected(&self) -> Option<&Node> {
        self.selected.and_then(|id| find(&self.forest, id))
    }

    /// Records the dragged node. Overwrites any drag already held.
    pub fn drag_start(&mut self, id: u64) {
        debug!(source = id, "drag start");
        self.drag = DragState::Dragging(id);
    }

    /// Ends a drag without a drop; the forest is unchanged.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Drops the dragged node onto another card. `as_child` nests it under
    /// the target; otherwise it becomes an adjacent sibling.
    pub fn drop_on_node(&mut self, target_id: u64, as_child: bool) {
        let DragState::Dragging(source_id) = self.drag else {
            debug!("drop ignored: no drag in progress");
            return;
        };

        debug!(source = source_id, target = target_id, as_child, "drop");
        self.forest = apply_drop(&self.forest, source_id, Some(target_id), as_child, None);
        self.drag = DragState::Idle;
    }

    /// Drops the dragged node onto an empty column; the node joins the root
    /// list and takes the column's status.
    pub fn drop_on_column(&mut self, status: Status) {
        let DragState::Dragging(source_id) = self.drag else {
            debug!("drop ignored: no drag in progress");
            return;
        };

        debug!(source = source_id, column = %status, "drop on column");
        self.forest = apply_drop(&self.forest, source_id, None, false, Some(status));
        self.drag = DragState::Idle;
    }
}
