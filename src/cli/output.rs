//! Terminal rendering and progress spinners

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::SearchStats,
    tictactoe::{Board, Outcome},
};

/// Create a spinner shown while an engine searches
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Board with row and column indices around it:
///
/// ```text
///     0 1 2
///   0 X . O
///   1 . X .
///   2 . . .
/// ```
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');
    for (row, cells) in board.cells().chunks(size).enumerate() {
        out.push_str(&format!("  {row}"));
        for cell in cells {
            out.push(' ');
            out.push(cell.to_char());
        }
        out.push('\n');
    }
    out
}

/// One-line summary of a finished or running game, naming the winning line
pub fn describe_outcome(board: &Board) -> String {
    match board.outcome() {
        Outcome::InProgress => format!("{} to move", board.current_player()),
        Outcome::Draw => Outcome::Draw.to_string(),
        outcome @ Outcome::Win(_) => match board.winning_line() {
            Some((_, cells)) => {
                let line: Vec<String> = cells.iter().map(ToString::to_string).collect();
                format!("{outcome} ({})", line.join(" "))
            }
            None => outcome.to_string(),
        },
    }
}

/// Print search counters
pub fn print_stats(stats: &SearchStats) {
    print_kv("Nodes", &format_number(stats.nodes));
    print_kv("Terminal nodes", &format_number(stats.terminal_nodes));
    print_kv("Cut-offs", &format_number(stats.cutoffs));
    print_kv("Max depth", &stats.max_depth.to_string());
}
