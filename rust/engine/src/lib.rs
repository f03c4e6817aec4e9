//! # pokerhands-engine: Poker Hand Classification Core
//!
//! Classifies five-card poker hands into the ten standard categories and
//! compares two hands with full kicker tie-breaking. Classification is a
//! pure function from a hand to a totally ordered ranking key, so hands
//! from any source compare deterministically with no shared state.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and token parsing
//! - [`hand`] - Hand classification and ranking-key comparison
//! - [`parse`] - Hand-file line parsing into five-card hands
//! - [`logger`] - JSONL duel record serialization
//! - [`errors`] - Error types for malformed input
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhands_engine::hand::{classify, compare, Category};
//! use pokerhands_engine::parse::parse_line;
//!
//! let (hand1, hand2) = parse_line("AS KS QS JS TS 2D 3C 4S 5H 6D").unwrap();
//!
//! assert_eq!(classify(&hand1).category, Category::RoyalFlush);
//! assert_eq!(classify(&hand2).category, Category::Straight);
//! assert!(compare(&hand1, &hand2).is_gt());
//! ```
//!
//! ## Tie-Breaking
//!
//! Hands of the same category are ordered by their tie-break ranks, most
//! significant first (pair/triple/quad ranks before kickers):
//!
//! ```rust
//! use pokerhands_engine::hand::classify;
//! use pokerhands_engine::parse::parse_hand;
//!
//! let pair_of_jacks = parse_hand(&["3H", "7H", "6S", "JC", "JS"]).unwrap();
//! let key = classify(&pair_of_jacks);
//! assert_eq!(key.kickers, [11, 7, 6, 3, 0]);
//! ```

pub mod cards;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod parse;
