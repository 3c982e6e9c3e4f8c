//! CLI infrastructure for the Ataxx engines
//!
//! Subcommands play a full game, ask one engine for a move, and inspect a
//! persisted Q-table.

pub mod commands;
pub mod output;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr so they do
/// not mix with command output.
pub fn init_tracing(level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}
