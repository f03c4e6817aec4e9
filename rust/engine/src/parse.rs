//! Parsing of hand-file tokens into [`Hand`] values.
//!
//! Hand files carry ten whitespace-separated two-character tokens per line:
//! the first five are hand 1, the last five hand 2. Token syntax lives on
//! [`Card::from_token`]; this module only handles grouping and cardinality.

use crate::cards::Card;
use crate::errors::ParseError;
use crate::hand::Hand;

/// Builds a hand from exactly five card tokens.
pub fn parse_hand(tokens: &[&str]) -> Result<Hand, ParseError> {
    if tokens.len() != 5 {
        return Err(ParseError::InvalidHand {
            expected: 5,
            actual: tokens.len(),
        });
    }
    let mut cards = [Card::from_token(tokens[0])?; 5];
    for (slot, token) in cards.iter_mut().zip(tokens) {
        *slot = Card::from_token(token)?;
    }
    Ok(cards)
}

/// Splits one input line into two five-card hands.
///
/// Lines with anything other than ten tokens fail with
/// [`ParseError::InvalidHand`]; malformed tokens surface the underlying
/// symbol error.
pub fn parse_line(line: &str) -> Result<(Hand, Hand), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 10 {
        return Err(ParseError::InvalidHand {
            expected: 10,
            actual: tokens.len(),
        });
    }
    Ok((parse_hand(&tokens[0..5])?, parse_hand(&tokens[5..10])?))
}
