//! Roman numeral arithmetic engine
//!
//! Adds canonical Roman numerals in the range `I`..=`MMMMCMXCIX` (1..=4999)
//! by rewriting symbols, without converting through integers.
//!
//! # Example
//!
//! ```
//! use roman_engine::{add, format, parse};
//!
//! let a = parse("II").unwrap();
//! let b = parse("VIII").unwrap();
//! assert_eq!(format(&add(&a, &b).unwrap()), "X");
//! ```
//!
//! # Architecture
//!
//! - [`symbol`]: Symbols and the static magnitude, subtractive and collapse tables
//! - [`validator`]: Canonical grammar check
//! - [`numeral`]: The validated [`Numeral`] value type
//! - [`expander`]: Subtractive pairs to additive runs
//! - [`merger`]: Magnitude-ordered merge of two symbol streams
//! - [`collapser`]: Duplicate collapsing with carry propagation
//! - [`recollapser`]: Additive runs back to subtractive pairs
//! - [`adder`]: The addition pipeline
//! - [`config`]: Range constants
//! - [`error`]: Error types and Result alias

pub mod adder;
pub mod collapser;
pub mod config;
pub mod error;
pub mod expander;
pub mod merger;
pub mod numeral;
pub mod recollapser;
pub mod symbol;
pub mod validator;

// Re-export commonly used items
pub use adder::add;
pub use error::{InvalidNumeral, NumeralError, Overflow, Result};
pub use numeral::Numeral;
pub use symbol::Symbol;
pub use validator::is_canonical;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse user input into a [`Numeral`].
///
/// # Errors
///
/// Returns [`InvalidNumeral`] when `text` is empty or not canonical.
pub fn parse(text: &str) -> std::result::Result<Numeral, InvalidNumeral> {
    Numeral::parse(text)
}

/// Canonical text of a numeral, for display.
pub fn format(numeral: &Numeral) -> String {
    numeral.to_string()
}
