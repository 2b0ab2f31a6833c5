//! Reintroduces subtractive notation into a collapsed sequence.

use crate::symbol::{contraction_of, Symbol};

/// Window widths tried at each position, longest first so that `VIIII`
/// becomes `IX` rather than `VIV`.
const WINDOWS: [usize; 2] = [5, 4];

/// Replace every additive run with its subtractive pair.
///
/// Expects the output of
/// [`collapse_duplicates`](crate::collapser::collapse_duplicates). Symbols
/// that start no known run are copied through unchanged.
pub fn recollapse(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut result = Vec::with_capacity(symbols.len());
    let mut i = 0;

    while i < symbols.len() {
        let matched = WINDOWS.iter().find_map(|&width| {
            symbols
                .get(i..i + width)
                .and_then(contraction_of)
                .map(|pair| (pair, width))
        });

        match matched {
            Some((pair, width)) => {
                result.extend_from_slice(&pair);
                i += width;
            }
            None => {
                result.push(symbols[i]);
                i += 1;
            }
        }
    }

    result
}
