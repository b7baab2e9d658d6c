use chrono::NaiveDate;

use crate::models::{Node, NodeKind, Status};

/// Partial overlay of node fields, merged over an existing node by
/// [`update`](super::update). Fields left as `None` keep their current value.
///
/// `start_date`/`end_date` are doubly optional so a patch can distinguish
/// "leave the date alone" from "clear the date".
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub name: Option<String>,
    pub kind: Option<NodeKind>,
    pub status: Option<Status>,
    pub description: Option<String>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub expanded: Option<bool>,
}

impl NodePatch {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn expanded(expanded: bool) -> Self {
        Self {
            expanded: Some(expanded),
            ..Self::default()
        }
    }

    /// Returns a copy of `node` with the patched fields merged in.
    /// Children are carried over untouched.
    pub fn apply(&self, node: &Node) -> Node {
        let mut out = node.clone();

        if let Some(name) = &self.name {
            out.name = name.clone();
        }
        if let Some(kind) = self.kind {
            out.kind = kind;
        }
        if let Some(status) = self.status {
            out.status = status;
        }
        if let Some(description) = &self.description {
            out.description = description.clone();
        }
        if let Some(start_date) = self.start_date {
            out.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            out.end_date = end_date;
        }
        if let Some(expanded) = self.expanded {
            out.expanded = expanded;
        }

        out
    }
}
