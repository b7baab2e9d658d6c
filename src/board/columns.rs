//! Kanban projection: root nodes grouped into status columns.

use crate::models::{Node, Status};

/// One displayed column and the root cards it holds, in forest order.
#[derive(Debug)]
pub struct Column<'a> {
    pub status: Status,
    pub cards: Vec<&'a Node>,
}

/// Partitions the root nodes into the displayed columns.
///
/// Pure function of the forest: only root-level status selects a bucket,
/// children stay nested under their root, and relative order within each
/// bucket follows the root sequence.
pub fn columns(forest: &[Node]) -> Vec<Column<'_>> {
    Status::COLUMNS
        .iter()
        .map(|&status| Column {
            status,
            cards: forest.iter().filter(|node| node.status == status).collect(),
        })
        .collect()
}
