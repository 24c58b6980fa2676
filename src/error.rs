//! Error types for parsing primitives and replaying hands.

use thiserror::Error;

/// Errors that can occur while parsing a card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The token is empty.
    #[error("empty card token")]
    Empty,
    /// The rank part is not recognized.
    #[error("invalid card rank in `{0}`")]
    InvalidRank(String),
    /// The suit part is not recognized.
    #[error("invalid card suit in `{0}`")]
    InvalidSuit(String),
}

/// Errors that can occur while parsing an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    /// No digits were found.
    #[error("empty amount")]
    Empty,
    /// The text is not a decimal number.
    #[error("invalid amount `{0}`")]
    Invalid(String),
    /// More than two fractional digits.
    #[error("amount `{0}` has more than two decimal places")]
    TooPrecise(String),
    /// The value does not fit.
    #[error("amount `{0}` is out of range")]
    Overflow(String),
}

/// Errors that can occur when computing a replay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The requested event index is past the end of the timeline.
    #[error("event index {index} is out of bounds for a timeline of {len} events")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of events.
        len: usize,
    },
}
