//! Classify command: report the category and tie-break key of one hand.

use std::io::Write;

use pokerhands_engine::hand::classify;
use pokerhands_engine::parse::parse_hand;

use crate::error::CliError;
use crate::formatters::{format_hand, format_tiebreak, tiebreak_ranks};

/// Classifies a single five-card hand given as card tokens.
///
/// Tokens may arrive as separate arguments or as one quoted
/// whitespace-separated argument; both spellings are accepted.
pub fn handle_classify_command(
    cards: Vec<String>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let tokens: Vec<&str> = cards.iter().flat_map(|c| c.split_whitespace()).collect();
    let hand = parse_hand(&tokens)?;
    let key = classify(&hand);

    if json {
        let value = serde_json::json!({
            "hand": format_hand(&hand),
            "category": key.category,
            "tiebreak": tiebreak_ranks(&key),
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "Hand: {}", format_hand(&hand))?;
        writeln!(out, "Category: {}", key.category)?;
        writeln!(out, "Tie-break: {}", format_tiebreak(&key))?;
    }
    Ok(())
}
