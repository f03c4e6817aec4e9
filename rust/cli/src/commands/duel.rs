//! Duel command: compare two hands from the command line.

use std::cmp::Ordering;
use std::io::Write;

use pokerhands_engine::hand::{classify, compare};
use pokerhands_engine::parse::parse_line;

use crate::error::CliError;
use crate::formatters::format_hand;

/// Compares two five-card hands given as ten card tokens and reports the
/// winner. A tie is a legitimate outcome when the keys match exactly.
pub fn handle_duel_command(
    cards: Vec<String>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let joined = cards.join(" ");
    let (hand1, hand2) = parse_line(&joined)?;
    let key1 = classify(&hand1);
    let key2 = classify(&hand2);
    let winner = match compare(&hand1, &hand2) {
        Ordering::Greater => Some(1),
        Ordering::Less => Some(2),
        Ordering::Equal => None,
    };

    if json {
        let value = serde_json::json!({
            "hand1": { "cards": format_hand(&hand1), "category": key1.category },
            "hand2": { "cards": format_hand(&hand2), "category": key2.category },
            "winner": winner,
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "Hand 1: {} ({})", format_hand(&hand1), key1.category)?;
        writeln!(out, "Hand 2: {} ({})", format_hand(&hand2), key2.category)?;
        match winner {
            Some(p) => writeln!(out, "Winner: Player {}", p)?,
            None => writeln!(out, "Winner: Tie")?,
        }
    }
    Ok(())
}
