//! # Pokerhands CLI Library
//!
//! This library provides the command-line interface for the pokerhands
//! classification engine. It solves Project Euler problem #54: given a file
//! of two-hand lines, count how many lines player 1 wins.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerhands", "solve", "--file", "poker.txt"];
//! let code = pokerhands_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `solve`: Count the lines of a hand file won by player 1
//! - `classify`: Print the category and tie-break key of one hand
//! - `duel`: Compare two hands and report the winner

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;

use cli::{Commands, PokerhandsCli};

use commands::{handle_classify_command, handle_duel_command, handle_solve_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pokerhands", "classify", "AS", "KS", "QS", "JS", "TS"];
/// let code = pokerhands_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["solve", "classify", "duel"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = PokerhandsCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Pokerhands CLI").is_err()
                        || writeln!(err, "Usage: pokerhands <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: pokerhands --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Solve { file, log } => handle_solve_command(file, log, out, err),
                Commands::Classify { cards, json } => handle_classify_command(cards, json, out),
                Commands::Duel { cards, json } => handle_duel_command(cards, json, out),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
    }
}
