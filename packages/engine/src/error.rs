//! Error types for the Roman numeral engine.
//!
//! Uses the dual-error pattern: [`InvalidNumeral`] and [`Overflow`] are the
//! precise failure types returned by `parse` and `add`, and [`NumeralError`]
//! unifies them for callers that handle both kinds the same way.

use thiserror::Error;

use crate::config::MAX_VALUE;

/// Raised when a string is not a canonical Roman numeral in range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNumeral {
    /// The input was the empty string.
    #[error("Zero length Roman numeral")]
    Empty,

    /// The input does not match the canonical grammar.
    #[error("{0} is not a Roman numeral")]
    NotCanonical(String),
}

impl InvalidNumeral {
    /// The offending input text (empty for [`InvalidNumeral::Empty`]).
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::NotCanonical(text) => text,
        }
    }
}

/// Raised when the sum of two numerals exceeds [`MAX_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Resulting Roman numeral larger than {}", MAX_VALUE)]
pub struct Overflow;

/// Main error type for engine consumers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// Input could not be parsed.
    #[error(transparent)]
    Invalid(#[from] InvalidNumeral),

    /// Addition left the representable range.
    #[error(transparent)]
    Overflow(#[from] Overflow),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, NumeralError>;
