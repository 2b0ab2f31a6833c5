//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use roman_engine::Numeral;

/// Digit tables for the reference integer-to-numeral conversion.
const THOUSANDS: [&str; 5] = ["", "M", "MM", "MMM", "MMMM"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Canonical numeral text for `value` (1..=4999), computed digit by digit.
///
/// Independent of the engine, so it can serve as an oracle.
pub fn to_roman(value: u16) -> String {
    assert!((1..=4999).contains(&value), "{value} out of range");
    let v = usize::from(value);
    format!(
        "{}{}{}{}",
        THOUSANDS[v / 1000],
        HUNDREDS[(v / 100) % 10],
        TENS[(v / 10) % 10],
        ONES[v % 10]
    )
}

/// Parse the canonical numeral for `value`.
pub fn numeral(value: u16) -> Numeral {
    Numeral::parse(&to_roman(value)).unwrap_or_else(|e| panic!("{value}: {e}"))
}

/// Parse a literal numeral.
pub fn parse(text: &str) -> Numeral {
    Numeral::parse(text).unwrap_or_else(|e| panic!("{text}: {e}"))
}
