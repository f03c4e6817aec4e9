//! Euler #54 solve command: count the lines of a hand file won by player 1.
//!
//! Reads the input file, parses each non-empty line into two five-card
//! hands, compares them, and reports how many lines player 1 wins. Any
//! malformed line aborts the run with its line number; nothing is skipped
//! silently.

use std::cmp::Ordering;
use std::io::Write;

use pokerhands_engine::hand::{classify, compare};
use pokerhands_engine::logger::{DuelLogger, DuelRecord};
use pokerhands_engine::parse::parse_line;

use crate::error::CliError;
use crate::io_utils::{numbered_lines, read_text};
use crate::ui;

/// Counts player 1 wins across a hand file.
///
/// # Arguments
///
/// * `file` - Path to the hand file (ten card tokens per line)
/// * `log` - Optional path for a JSONL log of every compared pair
/// * `out` - Output stream for the result report
/// * `err` - Output stream for warnings
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when every line parsed and the count
/// was reported, otherwise an `Err` that maps to exit code `2`.
pub fn handle_solve_command(
    file: String,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text(&file)?;
    let lines = numbered_lines(&content);
    if lines.is_empty() {
        ui::display_warning(err, &format!("{} contains no hand lines", file))?;
    }

    let mut logger = match log {
        Some(path) => Some(DuelLogger::create(path)?),
        None => None,
    };

    let mut compared = 0usize;
    let mut player1_wins = 0usize;
    for (line_no, line) in lines {
        let (hand1, hand2) =
            parse_line(line).map_err(|source| CliError::Parse { line: line_no, source })?;
        let outcome = compare(&hand1, &hand2);
        compared += 1;
        if outcome == Ordering::Greater {
            player1_wins += 1;
        }

        if let Some(logger) = logger.as_mut() {
            let winner = match outcome {
                Ordering::Greater => Some(1),
                Ordering::Less => Some(2),
                Ordering::Equal => None,
            };
            logger.write(&DuelRecord {
                line_no,
                hand1: hand1.to_vec(),
                hand2: hand2.to_vec(),
                category1: classify(&hand1).category,
                category2: classify(&hand2).category,
                winner,
                ts: None,
            })?;
        }
    }

    writeln!(out, "Hands compared: {}", compared)?;
    writeln!(out, "Player 1 wins: {}", player1_wins)?;
    Ok(())
}
