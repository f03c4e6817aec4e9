use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid rank symbol: '{0}'")]
    InvalidRankSymbol(char),
    #[error("Invalid suit symbol: '{0}'")]
    InvalidSuitSymbol(char),
    #[error("Invalid card token: '{0}' (expected rank symbol followed by suit symbol)")]
    InvalidCardToken(String),
    #[error("Invalid hand: expected {expected} cards, got {actual}")]
    InvalidHand { expected: usize, actual: usize },
}
