use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trellis::commands::{check, move_card, show, tree};
use trellis::models::Status;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Hierarchical kanban board engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the kanban columns for a snapshot
    Show {
        /// Path to the snapshot file
        snapshot: PathBuf,

        /// Print card descriptions and dates as well
        #[arg(long)]
        expanded: bool,
    },

    /// Print the assembled work-item tree
    Tree {
        /// Path to the snapshot file
        snapshot: PathBuf,
    },

    /// Validate a snapshot and report totals
    Check {
        /// Path to the snapshot file
        snapshot: PathBuf,
    },

    /// Apply one drag/drop gesture and print the resulting board
    Move {
        /// Path to the snapshot file
        snapshot: PathBuf,

        /// Id of the dragged node
        source_id: u64,

        /// Id of the drop target (omit when using --column)
        target_id: Option<u64>,

        /// Nest the source under the target instead of reordering next to it
        #[arg(long)]
        as_child: bool,

        /// Drop onto an empty column with this status
        #[arg(long)]
        column: Option<Status>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TRELLIS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { snapshot, expanded } => show::run(&snapshot, expanded),
        Commands::Tree { snapshot } => tree::run(&snapshot),
        Commands::Check { snapshot } => check::run(&snapshot),
        Commands::Move {
            snapshot,
            source_id,
            target_id,
            as_child,
            column,
        } => move_card::run(&snapshot, source_id, target_id, as_child, column),
    }
}
