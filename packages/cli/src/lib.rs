//! Command-line front end for the Roman numeral engine.
//!
//! Reads two numerals (from arguments or stdin), adds them with
//! [`roman_engine::add`] and prints the result or the engine's error.
//!
//! - [`cli`]: Argument parsing and command execution
//! - [`error`]: Error types and Result alias

pub mod cli;
pub mod error;

pub use error::{CliError, Result};
