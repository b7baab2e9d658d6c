//! Shared board rendering helpers for the CLI commands.

use colored::{ColoredString, Colorize};

use crate::board::columns;
use crate::models::{Node, Status};

/// Status badge with the column's display color.
pub fn badge(status: Status) -> ColoredString {
    match status {
        Status::ToDo => status.as_str().white().dimmed(),
        Status::Backlog => status.as_str().yellow(),
        Status::InProgress => status.as_str().blue(),
        Status::InReview => status.as_str().magenta(),
        Status::Done => status.as_str().green(),
    }
}

fn print_card(node: &Node, level: usize) {
    let indent = "  ".repeat(level);
    println!("{indent}• {} [{}]", node.name, badge(node.status));

    if node.expanded {
        if !node.description.is_empty() {
            println!("{indent}    {}", node.description.dimmed());
        }
        if node.start_date.is_some() || node.end_date.is_some() {
            let fmt = |d: Option<chrono::NaiveDate>| {
                d.map(|d| d.to_string()).unwrap_or_else(|| "…".to_string())
            };
            println!(
                "{indent}    {}",
                format!("{} → {}", fmt(node.start_date), fmt(node.end_date)).dimmed()
            );
        }
    }

    for child in &node.children {
        print_card(child, level + 1);
    }
}

/// Prints the kanban projection, one column per displayed status.
pub fn print_columns(forest: &[Node]) {
    for column in columns(forest) {
        println!("{}", column.status.as_str().bold());
        println!("{}", "─".repeat(40));

        if column.cards.is_empty() {
            println!("{}", "(empty)".dimmed());
        }
        for card in &column.cards {
            print_card(card, 0);
        }
        println!();
    }
}
