//! Card and ranking-key formatters for terminal display.
//!
//! This module provides pure functions for formatting hands and
//! classification results for terminal output. Cards render as their
//! two-character file tokens (`AS`, `TD`, ...) so output lines can be fed
//! straight back into the parser.
//!
//! ## Example
//!
//! ```rust
//! use pokerhands_engine::hand::classify;
//! use pokerhands_engine::parse::parse_hand;
//! use pokerhands_cli::formatters::{format_hand, format_tiebreak};
//!
//! let hand = parse_hand(&["3H", "7H", "6S", "KC", "JS"]).unwrap();
//! assert_eq!(format_hand(&hand), "3H 7H 6S KC JS");
//! assert_eq!(format_tiebreak(&classify(&hand)), "13 11 7 6 3");
//! ```

use pokerhands_engine::cards::Card;
use pokerhands_engine::hand::RankingKey;

/// Format a hand as space-separated card tokens in dealt order.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the tie-break ranks of a ranking key, high priority first.
/// Trailing zero padding is dropped; only meaningful ranks appear.
pub fn format_tiebreak(key: &RankingKey) -> String {
    tiebreak_ranks(key)
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The meaningful tie-break ranks of a key (padding stripped).
pub fn tiebreak_ranks(key: &RankingKey) -> Vec<u8> {
    key.kickers.iter().copied().filter(|&r| r != 0).collect()
}
