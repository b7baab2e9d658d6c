//! Snapshot loading: flat records plus parent/child edges assembled into a
//! forest.
//!
//! Malformed input (duplicate ids, dangling edges, relationship cycles) is
//! the one condition surfaced as an error instead of degraded to a no-op: it
//! means the source data is corrupt, not that the UI held a stale reference.


use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Node, NodeKind, Status};

/// One flat work-item record, before any hierarchy is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub status: Status,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// A parent/child pair; child order in this list is the sibling order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub parent_id: u64,
    pub child_id: u64,
}

/// The on-disk document: flat records plus the edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub relationships: Vec<Edge>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("duplicate node id {0}")]
    DuplicateId(u64),

    #[error("relationship names unknown parent {parent_id} (child {child_id})")]
    UnknownParent { parent_id: u64, child_id: u64 },

    #[error("relationship names unknown child {child_id} (parent {parent_id})")]
    UnknownChild { parent_id: u64, child_id: u64 },

    #[error("node {0} is linked as its own parent")]
    SelfEdge(u64),

    #[error("node {0} has more than one parent")]
    DuplicateParent(u64),

    #[error("relationship cycle involving node {0}")]
    Cycle(u64),
}

/// Builds the forest from a snapshot.
///
/// Roots are the Feature-kind records never named as a child; parentless
/// records of other kinds are dropped, matching the board's loader. Children
/// attach in edge order and every node starts collapsed.
pub fn assemble(snapshot: &Snapshot) -> Result<Vec<Node>, SnapshotError> {
    let mut records: HashMap<u64, &NodeRecord> = HashMap::new();
    for record in &snapshot.nodes {
        if records.insert(record.id, record).is_some() {
            return Err(SnapshotError::DuplicateId(record.id));
        }
    }

    let mut children: HashMap<u64, Vec<u64>> = HashMap::new();
    let mut parents: HashMap<u64, u64> = HashMap::new();
    for edge in &snapshot.relationships {
        if edge.parent_id == edge.child_id {
            return Err(SnapshotError::SelfEdge(edge.child_id));
        }
        if !records.contains_key(&edge.parent_id) {
            return Err(SnapshotError::UnknownParent {
                parent_id: edge.parent_id,
                child_id: edge.child_id,
            });
        }
        if !records.contains_key(&edge.child_id) {
            return Err(SnapshotError::UnknownChild {
                parent_id: edge.parent_id,
                child_id: edge.child_id,
            });
        }
        if parents.insert(edge.child_id, edge.parent_id).is_some() {
            return Err(SnapshotError::DuplicateParent(edge.child_id));
        }
        children.entry(edge.parent_id).or_default().push(edge.child_id);
    }

    // Every parent chain must terminate at a parentless node. A cycle keeps
    // all of its members away from the root list, so it has to be caught
    // here rather than during the build walk.
    for &start in parents.keys() {
        let mut current = start;
        let mut hops = 0;
        while let Some(&parent) = parents.get(&current) {
            hops += 1;
            if parent == start || hops > parents.len() {
                return Err(SnapshotError::Cycle(start));
            }
            current = parent;
        }
    }

    fn build(
        id: u64,
        records: &HashMap<u64, &NodeRecord>,
        children: &HashMap<u64, Vec<u64>>,
    ) -> Node {
        let record = records[&id];
        let mut node = Node::new(id, record.name.clone(), record.kind, record.status);
        node.description = record.description.clone();
        node.start_date = record.start_date;
        node.end_date = record.end_date;

        if let Some(child_ids) = children.get(&id) {
            for &child_id in child_ids {
                node.children.push(build(child_id, records, children));
            }
        }

        node
    }

    let mut forest = Vec::new();
    for record in &snapshot.nodes {
        if record.kind == NodeKind::Feature && !parents.contains_key(&record.id) {
            forest.push(build(record.id, &records, &children));
        }
    }

    Ok(forest)
}

/// Reads and assembles a snapshot file.
pub fn load(path: &Path) -> Result<Vec<Node>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

    let snapshot: Snapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))?;

    let forest = assemble(&snapshot)
        .with_context(|| format!("Invalid snapshot: {}", path.display()))?;

    debug!(
        roots = forest.len(),
        nodes = forest.iter().map(|n| node_count(n)).sum::<usize>(),
        "snapshot loaded"
    );

    Ok(forest)
}

/// Number of nodes in a subtree, the root included.
pub fn node_count(node: &Node) -> usize {
    1 + node.children.iter().map(node_count).sum::<usize>()
}
