//! Drag/drop demonstration command
//! Usage: trellis move <snapshot> <source-id> [target-id] [--as-child] [--column <status>]
//!
//! Applies a single drop gesture to the loaded board and prints the result.
//! Mutations are in-memory only; nothing is written back.

use std::path::Path;

use anyhow::{bail, Result};

use super::common::print_columns;
use crate::board::BoardController;
use crate::models::{SequentialIds, Status};
use crate::snapshot;
use crate::tree::find;

pub fn run(
    path: &Path,
    source_id: u64,
    target_id: Option<u64>,
    as_child: bool,
    column: Option<Status>,
) -> Result<()> {
    let forest = snapshot::load(path)?;

    if find(&forest, source_id).is_none() {
        bail!("No node with id {source_id} in {}", path.display());
    }

    let ids = Box::new(SequentialIds::from_forest(&forest));
    let mut board = BoardController::new(forest, ids);

    board.drag_start(source_id);
    match (target_id, column) {
        (Some(target_id), None) => board.drop_on_node(target_id, as_child),
        (None, Some(status)) => board.drop_on_column(status),
        (Some(_), Some(_)) => bail!("Pass either a target id or --column, not both"),
        (None, None) => bail!("Pass a target id or --column <status>"),
    }

    print_columns(board.forest());
    Ok(())
}
