//! Forest display command
//! Usage: trellis tree <snapshot>

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::common::badge;
use crate::models::Node;
use crate::snapshot;

fn print_node(node: &Node, level: usize) {
    let indent = "  ".repeat(level);
    println!(
        "{indent}{} {} {} [{}]",
        format!("#{}", node.id).dimmed(),
        node.name,
        format!("({})", node.kind).dimmed(),
        badge(node.status),
    );

    for child in &node.children {
        print_node(child, level + 1);
    }
}

/// Prints the assembled forest as an indented tree with ids, kinds, and
/// statuses.
pub fn run(path: &Path) -> Result<()> {
    let forest = snapshot::load(path)?;

    for root in &forest {
        print_node(root, 0);
    }

    Ok(())
}
