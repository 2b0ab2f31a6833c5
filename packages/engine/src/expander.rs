//! Rewrites subtractive pairs into their additive runs.

use crate::symbol::{expansion_of, Symbol};

/// Replace every subtractive pair in `symbols` with its additive run.
///
/// Scans left to right without overlap: a matched pair consumes two symbols,
/// anything else is copied through one at a time. The output of a canonical
/// numeral is non-increasing in magnitude.
///
/// # Examples
/// ```
/// use roman_engine::expander::expand;
/// use roman_engine::Numeral;
/// use roman_engine::symbol::to_text;
///
/// let n = Numeral::parse("XIV").unwrap();
/// assert_eq!(to_text(&expand(n.symbols())), "XIIII");
/// ```
pub fn expand(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut result = Vec::with_capacity(symbols.len() * 2);
    let mut i = 0;
    while i < symbols.len() {
        if let Some(run) = symbols.get(i..i + 2).and_then(expansion_of) {
            result.extend_from_slice(run);
            i += 2;
        } else {
            result.push(symbols[i]);
            i += 1;
        }
    }
    result
}
