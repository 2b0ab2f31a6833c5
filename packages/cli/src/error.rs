//! Error types for the command-line front end.

use roman_engine::NumeralError;
use thiserror::Error;

/// Errors surfaced by the `roman-add` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected an operand or the sum overflowed.
    #[error(transparent)]
    Numeral(#[from] NumeralError),

    /// Input ended before two operands were read.
    #[error("Expected two Roman numerals separated by spaces")]
    MissingOperand,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
