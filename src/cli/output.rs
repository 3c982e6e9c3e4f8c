//! Output formatting and progress indicators for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::game::{Board, Move};

/// Create a spinner shown while an engine is thinking
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
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

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board indented under the current section
pub fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

/// Move list numbered by turn, red's move first on each line
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(turn, pair)| {
            let plies: Vec<String> = pair.iter().map(Move::to_string).collect();
            format!("{:>4}. {}", turn + 1, plies.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
