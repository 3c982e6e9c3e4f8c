mod common;

use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use ataxx::{
    Board, Error, PieceState, Player, Result, SarsaEngine,
    adapters::InMemoryRepository,
    game::enumerate,
    ports::QTableRepository,
    sarsa::{QTable, SarsaConfig, fingerprint},
};
use common::red_wins_next;

const TABLE: &str = "q.msgpack";

fn greedy() -> SarsaConfig {
    SarsaConfig::default()
        .with_epsilon(0.0)
        .with_table_path(TABLE)
}

fn engine(repo: Arc<dyn QTableRepository + Send + Sync>) -> SarsaEngine {
    SarsaEngine::new(PieceState::Red, greedy(), repo).with_seed(17)
}

/// Saves nothing and counts the attempts.
#[derive(Default)]
struct FailingRepository {
    saves: AtomicUsize,
}

impl QTableRepository for FailingRepository {
    fn save(&self, _table: &QTable, path: &Path) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(Error::Io {
            operation: format!("write {path:?}"),
            source: std::io::Error::other("disk full"),
        })
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        Err(Error::Io {
            operation: format!("read {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no table"),
        })
    }
}

#[test]
fn terminal_decision_applies_exact_update_and_saves() {
    let board = red_wins_next(PieceState::Red);
    let state = fingerprint(&board);
    let winning = "a1-a2".parse().unwrap();

    let repo = InMemoryRepository::new();
    let mut seeded = QTable::new();
    seeded.set(&state, winning, 0.3);
    repo.save(&seeded, Path::new(TABLE)).unwrap();

    let mut sarsa = engine(Arc::new(repo.clone()));
    assert_eq!(sarsa.table().get(&state, winning), Some(0.3));

    let mv = sarsa.choose_move(&board);
    assert_eq!(mv, winning);

    // reward 1, no successor values: 0.3 + 0.5 * (1 + 0.9 * 0 - 0.3)
    let expected = 0.3 + 0.5 * (1.0 + 0.9 * 0.0 - 0.3);
    let updated = sarsa.table().get(&state, winning).unwrap();
    assert!((updated - expected).abs() < 1e-12);

    let mut next = board;
    next.create_move(mv);
    assert!(sarsa.table().row(&fingerprint(&next)).unwrap().is_empty());

    // The finished game was written back.
    let stored = repo.load(Path::new(TABLE)).unwrap();
    assert_eq!(&stored, sarsa.table());
}

#[test]
fn intermediate_decision_bootstraps_from_successor() {
    let board = Board::new();
    let first = enumerate(&board, PieceState::Red)[0];
    let mut next = board;
    next.create_move(first);

    let repo = InMemoryRepository::new();
    let mut seeded = QTable::new();
    let reply = enumerate(&next, PieceState::Blue)[0];
    seeded.set(&fingerprint(&next), reply, 0.8);
    repo.save(&seeded, Path::new(TABLE)).unwrap();

    let mut sarsa = engine(Arc::new(repo.clone()));
    let mv = sarsa.choose_move(&board);
    assert_eq!(mv, first);

    let updated = sarsa.table().get(&fingerprint(&board), mv).unwrap();
    assert!((updated - 0.5 * 0.9 * 0.8).abs() < 1e-12);

    // Not terminal: the stored table is still the seeded one.
    assert_eq!(repo.load(Path::new(TABLE)).unwrap(), seeded);
}

#[test]
fn reward_is_judged_from_the_engines_colour() {
    // A blue engine asked to move for red still scores red's win as -1.
    let board = red_wins_next(PieceState::Red);
    let repo = InMemoryRepository::new();
    let mut blue = SarsaEngine::new(PieceState::Blue, greedy(), Arc::new(repo)).with_seed(1);

    let mv = blue.choose_move(&board);
    let mut next = board;
    next.create_move(mv);
    assert_eq!(next.winner(), Some(PieceState::Red));

    let value = blue.table().get(&fingerprint(&board), mv).unwrap();
    assert!((value - 0.5 * -1.0).abs() < 1e-12);
}

#[test]
fn save_failure_keeps_table_in_memory() {
    let repo = Arc::new(FailingRepository::default());
    let mut sarsa = engine(repo.clone());
    assert!(sarsa.table().is_empty());

    let board = red_wins_next(PieceState::Red);
    let mv = sarsa.choose_move(&board);

    assert!(board.move_legal(&mv));
    assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
    assert!(sarsa.table().get(&fingerprint(&board), mv).is_some());
    assert!(sarsa.save_table().is_err());
}

#[test]
fn epsilon_one_still_plays_legal_moves() {
    let repo = InMemoryRepository::new();
    let config = greedy().with_epsilon(1.0);
    let mut sarsa = SarsaEngine::new(PieceState::Red, config, Arc::new(repo)).with_seed(99);
    let board = Board::new();
    for _ in 0..10 {
        assert!(board.move_legal(&sarsa.choose_move(&board)));
    }
}
