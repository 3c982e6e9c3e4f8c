//! Ataxx CLI - play games between engines and inspect learned tables
//!
//! - `play`: one game between any two of minimax, mcts, sarsa and random
//! - `best-move`: the move one engine picks for a position
//! - `table`: statistics and JSON export for a saved Q-table

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ataxx")]
#[command(version, about = "Ataxx engines: minimax, MCTS and SARSA", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game between two engines
    Play(ataxx::cli::commands::play::PlayArgs),

    /// Print the move an engine chooses for a position
    BestMove(ataxx::cli::commands::best_move::BestMoveArgs),

    /// Inspect a saved Q-table
    Table(ataxx::cli::commands::table::TableArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ataxx::cli::init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Play(args) => ataxx::cli::commands::play::execute(args),
        Commands::BestMove(args) => ataxx::cli::commands::best_move::execute(args),
        Commands::Table(args) => ataxx::cli::commands::table::execute(args),
    }
}
