//! Two-pointer merge of expanded symbol streams.

use crate::symbol::Symbol;

/// Merge two non-increasing symbol sequences into one non-increasing sequence.
///
/// When the heads have equal magnitude the symbol from `a` is taken first,
/// so the merge is stable with left-operand priority. Runs in
/// `O(a.len() + b.len())`.
pub fn merge(a: &[Symbol], b: &[Symbol]) -> Vec<Symbol> {
    debug_assert!(a.windows(2).all(|w| w[0] >= w[1]), "left operand not sorted");
    debug_assert!(b.windows(2).all(|w| w[0] >= w[1]), "right operand not sorted");

    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].magnitude() >= b[j].magnitude() {
            result.push(a[i]);
            i += 1;
        } else {
            result.push(b[j]);
            j += 1;
        }
    }
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);

    result
}
