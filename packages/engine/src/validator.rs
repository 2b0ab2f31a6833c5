//! Canonical-grammar validation for Roman numerals.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::NUMERAL_PATTERN;
use crate::error::InvalidNumeral;

/// Canonical numeral pattern for values 1..=4999.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERAL_PATTERN).expect("valid regex"));

/// Check whether `text` is a canonical Roman numeral in range.
///
/// # Examples
/// ```
/// use roman_engine::validator::is_canonical;
///
/// assert!(is_canonical("MCMXCIV"));
/// assert!(!is_canonical("IIII"));
/// assert!(!is_canonical(""));
/// ```
pub fn is_canonical(text: &str) -> bool {
    !text.is_empty() && NUMERAL_REGEX.is_match(text)
}

/// Validate `text` against the canonical grammar.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(InvalidNumeral::Empty)` for the empty string
/// * `Err(InvalidNumeral::NotCanonical)` for anything else the grammar rejects
pub fn validate(text: &str) -> Result<(), InvalidNumeral> {
    if text.is_empty() {
        return Err(InvalidNumeral::Empty);
    }
    if NUMERAL_REGEX.is_match(text) {
        Ok(())
    } else {
        Err(InvalidNumeral::NotCanonical(text.to_string()))
    }
}
