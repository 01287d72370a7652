//! Strictly Rewind - tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_rewind::{render_replay, replay_moves, GameConfig, MoveToken, ReplayFormat};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    match cli.command {
        Command::Play { config } => run_play(config.as_deref()),
        Command::Replay {
            config,
            jump,
            json,
            moves,
        } => run_replay(config.as_deref(), &moves, jump, json),
    }
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the interactive terminal game
#[instrument]
fn run_play(config: Option<&Path>) -> Result<()> {
    let config = GameConfig::load(config).context("Failed to load config")?;
    info!(x = %config.symbols().x(), o = %config.symbols().o(), "Starting game");
    strictly_rewind::run_tui(config.symbols().clone())
}

/// Replay moves and print the resulting game
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(
    config: Option<&Path>,
    moves: &[MoveToken],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = GameConfig::load(config).context("Failed to load config")?;
    let history = replay_moves(moves, jump).context("Invalid --jump")?;
    let format = if json {
        ReplayFormat::Json
    } else {
        ReplayFormat::Text
    };
    debug!(step = history.step(), len = history.len(), ?format, "Replay finished");
    print!("{}", render_replay(&history, config.symbols(), format)?);
    if json {
        println!();
    }
    Ok(())
}
