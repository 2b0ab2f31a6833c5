//! Symbolic addition of two numerals.
//!
//! Addition never converts to integers. It runs four rewriting steps:
//!
//! 1. **Expand** subtractive pairs in both operands (`XIV` -> `XIIII`)
//! 2. **Merge** the two expanded sequences by magnitude
//! 3. **Collapse** duplicate runs to a fixed point (`IIIII` -> `V`, with carries)
//! 4. **Recollapse** additive runs back into subtractive pairs (`IIII` -> `IV`)
//!
//! The result is validated like any parsed input. Only sums above
//! [`MAX_VALUE`](crate::config::MAX_VALUE) can fail that check, so a
//! validation failure here is reported as [`Overflow`].

use crate::collapser::collapse_duplicates;
use crate::error::Overflow;
use crate::expander::expand;
use crate::merger::merge;
use crate::numeral::Numeral;
use crate::recollapser::recollapse;
use crate::symbol::to_text;

/// Add two numerals.
///
/// # Errors
///
/// Returns [`Overflow`] when the sum exceeds 4999.
///
/// # Examples
/// ```
/// use roman_engine::{add, Numeral};
///
/// let a = Numeral::parse("IV").unwrap();
/// let b = Numeral::parse("I").unwrap();
/// assert_eq!(add(&a, &b).unwrap().as_str(), "V");
///
/// let max = Numeral::parse("MMMMCMXCIX").unwrap();
/// assert!(add(&max, &b).is_err());
/// ```
pub fn add(a: &Numeral, b: &Numeral) -> Result<Numeral, Overflow> {
    let left = expand(a.symbols());
    let right = expand(b.symbols());
    let merged = merge(&left, &right);
    let collapsed = collapse_duplicates(&merged);
    let result = recollapse(&collapsed);

    tracing::trace!(
        left = %a,
        right = %b,
        merged = %to_text(&merged),
        collapsed = %to_text(&collapsed),
        result = %to_text(&result),
        "Addition pipeline finished"
    );

    Numeral::from_symbols(result).map_err(|_| Overflow)
}
