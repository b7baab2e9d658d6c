//! Board display command
//! Usage: trellis show <snapshot> [--expanded]

use std::path::Path;

use anyhow::Result;

use super::common::print_columns;
use crate::snapshot;
use crate::tree::{update_all, NodePatch};

/// Loads a snapshot and prints the kanban columns. With `expanded`, every
/// card also shows its description and dates.
pub fn run(path: &Path, expanded: bool) -> Result<()> {
    let mut forest = snapshot::load(path)?;

    if expanded {
        forest = update_all(&forest, &NodePatch::expanded(true));
    }

    print_columns(&forest);
    Ok(())
}
