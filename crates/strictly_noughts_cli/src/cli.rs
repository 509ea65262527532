//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_noughts::Mark;
use strictly_noughts_cli::GameMode;

/// Strictly Noughts - noughts and crosses against a friend or a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses with an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session config file (TOML); defaults apply if it does not exist
    #[arg(short, long, global = true, default_value = "strictly_noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Two people, or one against the computer
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Mark the computer plays (X moves first)
        #[arg(long)]
        computer_mark: Option<Mark>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Number of games to play in a row
        #[arg(short, long, default_value = "1")]
        games: u32,
    },

    /// Let the computer play itself
    Selfplay {
        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: u32,
    },

    /// Score every move in a position
    Analyze {
        /// Nine cells row by row: X, O, or . for empty (e.g. "XX./.O./...")
        #[arg(short, long)]
        board: String,

        /// Side to move; inferred from the mark counts if omitted
        #[arg(short, long)]
        to_move: Option<Mark>,
    },
}
