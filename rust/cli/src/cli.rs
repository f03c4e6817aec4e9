//! Clap argument definitions for the pokerhands CLI.
//!
//! Kept separate from command handlers so tests can exercise argument
//! parsing without running any command.

use clap::{Parser, Subcommand};

/// Top-level CLI parser.
#[derive(Debug, Parser)]
#[command(
    name = "pokerhands",
    version,
    about = "Classify and compare five-card poker hands (Project Euler #54)"
)]
pub struct PokerhandsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count the lines of a hand file won by player 1
    Solve {
        /// Input file: ten two-character card tokens per line, the first
        /// five being player 1's hand and the last five player 2's
        #[arg(short, long)]
        file: String,
        /// Write one JSONL duel record per compared line
        #[arg(long)]
        log: Option<String>,
    },
    /// Classify a single five-card hand
    Classify {
        /// Five card tokens, either quoted as one argument or separate
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Emit the result as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Compare two five-card hands and report the winner
    Duel {
        /// Ten card tokens: hand 1 first, then hand 2
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Emit the result as a JSON object
        #[arg(long)]
        json: bool,
    },
}
