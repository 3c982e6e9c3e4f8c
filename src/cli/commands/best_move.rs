//! Best-move command - Ask one engine for a move in a given position

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, EngineKind},
    cli::output::{create_spinner, print_board, print_kv, print_section},
    game::{Board, PieceState},
};

#[derive(Parser, Debug)]
#[command(about = "Print the move an engine picks for a position")]
pub struct BestMoveArgs {
    /// Engine to consult
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    pub engine: EngineKind,

    /// Board layout, seven rows from row 7 down separated by `/`
    /// (e.g. `b-----r/-------/.../r-----b`); defaults to the start position
    #[arg(long)]
    pub board: Option<String>,

    /// Side to move
    #[arg(long, default_value = "red")]
    pub to_move: PieceState,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with engine settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Q-table file used by the SARSA engine
    #[arg(long)]
    pub table: Option<PathBuf>,
}

/// Parse a `/`-separated layout for the given side to move.
pub fn parse_board(layout: Option<&str>, to_move: PieceState) -> Result<Board> {
    if !to_move.is_color() {
        anyhow::bail!("side to move must be red or blue, got {to_move}");
    }
    match layout {
        Some(layout) => Board::from_layout(&layout.replace('/', "\n"), to_move)
            .with_context(|| format!("Failed to parse board layout '{layout}'")),
        None => {
            let mut board = Board::new();
            board.set_next_move(to_move);
            Ok(board)
        }
    }
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let config =
        super::resolve_config(args.config.as_deref(), args.seed, args.table.clone())?;
    let board = parse_board(args.board.as_deref(), args.to_move)?;

    let app = App::new();
    let mut player = app.create_player(args.engine, args.to_move, &config);

    let spinner = create_spinner(&format!("{} is thinking", player.name()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let mv = player.choose_move(&board);
    spinner.finish_and_clear();

    print_section("Best move");
    print_board(&board);
    println!();
    print_kv("Engine", player.name());
    print_kv("To move", &args.to_move.to_string());
    print_kv("Move", &mv.to_string());

    Ok(())
}
