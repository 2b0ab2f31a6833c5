//! Duplicate collapsing with carry propagation.
//!
//! After merging, a sequence can hold runs that are worth a single symbol of
//! the next magnitude (`IIIII`, `VV`, `XXXXX`, ...). Collapsing one run can
//! complete another one level up, e.g. `VIIIIIIII` -> `VVIII` -> `XIII`, so
//! passes repeat until one of them changes nothing.

use std::iter;

use crate::symbol::{collapse_ending, Symbol};

/// Collapse every run listed in [`COLLAPSES`](crate::symbol::COLLAPSES) until
/// a fixed point is reached.
///
/// Input must be non-increasing in magnitude; the output is too, and holds at
/// most four `I`, `X` or `C` and at most one `V`, `L` or `D`. `M` never
/// collapses, so the result can still carry more than four of them.
pub fn collapse_duplicates(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut current = symbols.to_vec();
    let mut passes = 1;
    loop {
        let (next, collapsed) = collapse_pass(&current);
        if !collapsed {
            tracing::trace!(passes, "Duplicate collapse reached fixed point");
            return next;
        }
        current = next;
        passes += 1;
    }
}

/// A single right-to-left pass.
///
/// At each position the longest collapsible run ending there is replaced by
/// its symbol. Copies of the run's symbol directly to the left of the run are
/// moved behind the new symbol so magnitude order holds; a later pass folds
/// them if they still form a run. Returns the rewritten sequence and whether
/// anything collapsed.
fn collapse_pass(symbols: &[Symbol]) -> (Vec<Symbol>, bool) {
    // Built back to front, reversed at the end.
    let mut reversed = Vec::with_capacity(symbols.len());
    let mut collapsed = false;
    let mut end = symbols.len();

    while end > 0 {
        let Some(rule) = collapse_ending(&symbols[..end]) else {
            end -= 1;
            reversed.push(symbols[end]);
            continue;
        };

        let start = end - rule.count;
        let leftover = symbols[..start]
            .iter()
            .rev()
            .take_while(|&&s| s == rule.symbol)
            .count();

        reversed.extend(iter::repeat_n(rule.symbol, leftover));
        reversed.push(rule.into);
        end = start - leftover;
        collapsed = true;
    }

    reversed.reverse();
    (reversed, collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::to_text;
    use crate::symbol::Symbol::{C, D, I, L, M, V, X};

    fn collapse_text(symbols: &[Symbol]) -> String {
        to_text(&collapse_duplicates(symbols))
    }

    #[test]
    fn test_single_collapses() {
        assert_eq!(collapse_text(&[I, I, I, I, I]), "V");
        assert_eq!(collapse_text(&[V, V]), "X");
        assert_eq!(collapse_text(&[X, X, X, X, X]), "L");
        assert_eq!(collapse_text(&[L, L]), "C");
        assert_eq!(collapse_text(&[C, C, C, C, C]), "D");
        assert_eq!(collapse_text(&[D, D]), "M");
    }

    #[test]
    fn test_nothing_to_collapse() {
        assert_eq!(
            collapse_text(&[M, M, D, C, C, C, C, L, X, V, I, I, I, I]),
            "MMDCCCCLXVIIII"
        );
        assert_eq!(collapse_text(&[]), "");
    }

    #[test]
    fn test_leftover_copies_stay_below_new_symbol() {
        let (once, collapsed) = collapse_pass(&[V, I, I, I, I, I, I, I, I]);
        assert!(collapsed);
        assert_eq!(to_text(&once), "VVIII");
    }

    #[test]
    fn test_carry_propagation() {
        assert_eq!(collapse_text(&[V, I, I, I, I, I, I, I, I]), "XIII");
        // 999 + 1 carries all the way up to M.
        let merged = [D, C, C, C, C, L, X, X, X, X, V, I, I, I, I, I];
        assert_eq!(collapse_text(&merged), "M");
    }

    #[test]
    fn test_more_than_four_thousands_survive() {
        assert_eq!(collapse_text(&[M, M, M, M, D, D]), "MMMMM");
    }

    #[test]
    fn test_fixed_point_has_no_collapsible_run() {
        let merged = [
            M, D, D, C, C, C, C, C, C, C, C, L, L, X, X, X, X, X, X, X, X, V, V, I, I, I, I, I, I,
            I, I,
        ];
        let result = collapse_duplicates(&merged);
        assert!(result.windows(2).all(|w| w[0] >= w[1]));
        for rule in &crate::symbol::COLLAPSES {
            let count = result.iter().filter(|&&s| s == rule.symbol).count();
            assert!(
                count < rule.count,
                "{} still collapsible in {}",
                rule.symbol,
                to_text(&result)
            );
        }
        let before: u32 = merged.iter().map(|s| u32::from(s.magnitude())).sum();
        let after: u32 = result.iter().map(|s| u32::from(s.magnitude())).sum();
        assert_eq!(before, after);
    }
}
