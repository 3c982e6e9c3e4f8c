//! Play command - Run one game between two engines

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, EngineKind},
    cli::output::{format_moves, print_board, print_kv, print_section, print_subsection},
    game::{Board, Coord, Game, PieceState, session::DEFAULT_MAX_PLIES},
    ports::GameContext,
};

#[derive(Parser, Debug)]
#[command(about = "Play one game between two engines")]
pub struct PlayArgs {
    /// Engine playing red (moves first)
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    pub red: EngineKind,

    /// Engine playing blue
    #[arg(long, value_enum, default_value_t = EngineKind::Mcts)]
    pub blue: EngineKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with engine settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Q-table file used by SARSA players
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Blocked cells, mirrored into all four quadrants (e.g. `c3,b2`)
    #[arg(long, value_delimiter = ',')]
    pub blocks: Vec<Coord>,

    /// Abort the game after this many plies
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    pub max_plies: usize,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config =
        super::resolve_config(args.config.as_deref(), args.seed, args.table.clone())?;
    let app = App::new();

    let mut board = Board::new();
    for &block in &args.blocks {
        board
            .set_block(block)
            .with_context(|| format!("Failed to place block at {block}"))?;
    }

    let mut red = app.create_player(args.red, PieceState::Red, &config);
    let mut blue = app.create_player(args.blue, PieceState::Blue, &config);

    print_section("Ataxx");
    print_kv("Red", red.name());
    print_kv("Blue", blue.name());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }
    print_subsection("Start position");
    print_board(&board);

    let mut game = Game::new(board).with_max_plies(args.max_plies);
    let record = game
        .play(red.as_mut(), blue.as_mut())
        .context("Game aborted")?;

    print_subsection("Moves");
    println!("{}", format_moves(&record.moves));

    print_subsection("Final position");
    print_board(game.board());

    print_subsection("Result");
    let outcome = match record.winner {
        PieceState::Red => format!("red ({}) wins", red.name()),
        PieceState::Blue => format!("blue ({}) wins", blue.name()),
        _ => "tie".to_string(),
    };
    print_kv("Outcome", &outcome);
    print_kv(
        "Pieces",
        &format!("red {} / blue {}", record.red_count, record.blue_count),
    );
    print_kv("Plies", &record.moves.len().to_string());

    Ok(())
}
