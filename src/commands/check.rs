//! Snapshot validation command
//! Usage: trellis check <snapshot>

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::snapshot::{self, node_count};

/// Loads a snapshot and reports its totals. Malformed input (duplicate ids,
/// dangling edges, cycles) surfaces as the command's error.
pub fn run(path: &Path) -> Result<()> {
    let forest = snapshot::load(path)?;

    let total: usize = forest.iter().map(node_count).sum();
    println!(
        "{} {} ({} roots, {} nodes)",
        "✓".green().bold(),
        path.display(),
        forest.len(),
        total
    );

    Ok(())
}
