//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_rewind::MoveToken;

/// Strictly Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File that receives log output
    #[arg(long, global = true, default_value = "strictly_rewind.log")]
    pub log_file: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file with player symbols
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Path to a TOML config file with player symbols
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Step to jump to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the history as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Moves in play order: board indices (0-8, row-major) or labels
        /// such as center or top-left; illegal ones are skipped
        moves: Vec<MoveToken>,
    },
}
