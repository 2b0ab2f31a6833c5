//! The `Numeral` value type.
//!
//! A `Numeral` can only be obtained through validation, so every instance
//! holds a canonical Roman numeral in the range 1..=4999. Instances are
//! immutable; arithmetic always produces a new numeral.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adder;
use crate::error::{InvalidNumeral, Overflow};
use crate::symbol::{to_text, Symbol};
use crate::validator::validate;

/// A validated, canonical Roman numeral.
///
/// # Examples
///
/// ```
/// use roman_engine::Numeral;
///
/// let a = Numeral::parse("XLIX").unwrap();
/// let b = Numeral::parse("I").unwrap();
/// let sum = a.checked_add(&b).unwrap();
/// assert_eq!(sum.as_str(), "L");
/// assert_eq!(sum.value(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Numeral {
    text: String,
    symbols: Vec<Symbol>,
}

impl Numeral {
    /// Parse and validate a numeral.
    ///
    /// The text is stored verbatim; the grammar only admits canonical forms,
    /// so no normalization is needed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNumeral::Empty`] for the empty string and
    /// [`InvalidNumeral::NotCanonical`] for text outside the grammar.
    pub fn parse(text: &str) -> Result<Self, InvalidNumeral> {
        validate(text)?;
        let symbols = text
            .chars()
            .map(Symbol::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| InvalidNumeral::NotCanonical(text.to_string()))?;
        Ok(Self {
            text: text.to_string(),
            symbols,
        })
    }

    /// Build a numeral from a computed symbol sequence, re-running validation.
    pub(crate) fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, InvalidNumeral> {
        let text = to_text(&symbols);
        validate(&text)?;
        Ok(Self { text, symbols })
    }

    /// The canonical text of the numeral.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The symbols of the numeral, highest magnitude first.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Integer value under standard Roman valuation.
    pub fn value(&self) -> u16 {
        let mut total = 0;
        let mut iter = self.symbols.iter().peekable();
        while let Some(symbol) = iter.next() {
            match iter.peek() {
                Some(next) if next.magnitude() > symbol.magnitude() => {
                    total -= symbol.magnitude() as i32;
                }
                _ => total += symbol.magnitude() as i32,
            }
        }
        // A canonical numeral always evaluates into 1..=4999.
        total as u16
    }

    /// Add two numerals symbolically.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] when the sum exceeds the representable range.
    pub fn checked_add(&self, other: &Numeral) -> Result<Numeral, Overflow> {
        adder::add(self, other)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Numeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Numeral {
    type Err = InvalidNumeral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Numeral {
    type Error = InvalidNumeral;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Numeral {
    type Error = InvalidNumeral;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.text
    }
}

impl PartialOrd for Numeral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Numeral {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}
