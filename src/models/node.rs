use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single work item in the board hierarchy.
///
/// Nodes own their children exclusively; sibling order inside `children`
/// is the authoritative display order. The `expanded` flag is UI state
/// carried through every mutation but never part of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
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
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub expanded: bool,
}

impl Node {
    /// Creates a leaf node with empty description and no dates.
    pub fn new(id: u64, name: impl Into<String>, kind: NodeKind, status: Status) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            status,
            description: String::new(),
            start_date: None,
            end_date: None,
            children: Vec::new(),
            expanded: false,
        }
    }
}

/// Position of a node in the three-level domain hierarchy.
///
/// The hierarchy is fixed: Feature (level 0) → User Story (level 1) →
/// Task (level 2). The move policy refuses to nest anything below a Task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeKind {
    #[serde(rename = "Feature")]
    Feature,
    #[serde(rename = "User Story")]
    UserStory,
    #[serde(rename = "Task")]
    Task,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Feature => "Feature",
            NodeKind::UserStory => "User Story",
            NodeKind::Task => "Task",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a work item.
///
/// Only the status of root-level nodes selects a kanban column; descendant
/// statuses are independent and preserved through moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "Backlog")]
    Backlog,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "In Review")]
    InReview,
    #[serde(rename = "Done")]
    Done,
}

impl Status {
    /// The columns rendered on the board, in display order.
    pub const COLUMNS: [Status; 4] = [
        Status::Backlog,
        Status::InProgress,
        Status::InReview,
        Status::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::ToDo => "To Do",
            Status::Backlog => "Backlog",
            Status::InProgress => "In Progress",
            Status::InReview => "In Review",
            Status::Done => "Done",
        }
    }

    /// Parses the wire/display name back into a status.
    pub fn parse(name: &str) -> Option<Status> {
        match name {
            "To Do" | "todo" => Some(Status::ToDo),
            "Backlog" | "backlog" => Some(Status::Backlog),
            "In Progress" | "in-progress" => Some(Status::InProgress),
            "In Review" | "in-review" => Some(Status::InReview),
            "Done" | "done" => Some(Status::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(s).ok_or_else(|| {
            format!(
                "unknown status '{s}' (expected one of: To Do, Backlog, In Progress, In Review, Done)"
            )
        })
    }
}
