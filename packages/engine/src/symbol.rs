//! Roman symbols and the static tables the arithmetic pipeline works from.
//!
//! Three read-only tables drive addition:
//! - **Magnitudes**: [`Symbol::magnitude`], the value of each symbol
//! - **Subtractives**: [`SUBTRACTIVES`], the six subtractive pairs and the
//!   additive runs they stand for (`IV` <-> `IIII`, `IX` <-> `VIIII`, ...)
//! - **Collapses**: [`COLLAPSES`], runs of one symbol that are worth exactly
//!   one symbol of the next magnitude (`IIIII` -> `V`, `VV` -> `X`, ...)
//!
//! All of them are `static` data shared by every numeral.

use std::fmt;

use Symbol::{C, D, I, L, M, V, X};

/// A single Roman numeral symbol.
///
/// Variants are declared in increasing magnitude, so the derived ordering
/// agrees with [`Symbol::magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// Every symbol, lowest magnitude first.
    pub const ALL: [Symbol; 7] = [I, V, X, L, C, D, M];

    /// Integer value of the symbol.
    #[must_use]
    pub const fn magnitude(self) -> u16 {
        match self {
            I => 1,
            V => 5,
            X => 10,
            L => 50,
            C => 100,
            D => 500,
            M => 1000,
        }
    }

    /// Character used to write the symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            I => 'I',
            V => 'V',
            X => 'X',
            L => 'L',
            C => 'C',
            D => 'D',
            M => 'M',
        }
    }

    /// Parse a single character. Only upper-case symbols are accepted.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(I),
            'V' => Some(V),
            'X' => Some(X),
            'L' => Some(L),
            'C' => Some(C),
            'D' => Some(D),
            'M' => Some(M),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A subtractive pair and the additive run it abbreviates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtractive {
    pub pair: [Symbol; 2],
    pub run: &'static [Symbol],
}

/// The six subtractive pairs of canonical notation.
pub static SUBTRACTIVES: [Subtractive; 6] = [
    Subtractive { pair: [I, V], run: &[I, I, I, I] },
    Subtractive { pair: [I, X], run: &[V, I, I, I, I] },
    Subtractive { pair: [X, L], run: &[X, X, X, X] },
    Subtractive { pair: [X, C], run: &[L, X, X, X, X] },
    Subtractive { pair: [C, D], run: &[C, C, C, C] },
    Subtractive { pair: [C, M], run: &[D, C, C, C, C] },
];

/// Look up the additive run for a subtractive pair.
#[must_use]
pub fn expansion_of(pair: &[Symbol]) -> Option<&'static [Symbol]> {
    SUBTRACTIVES
        .iter()
        .find(|s| s.pair.as_slice() == pair)
        .map(|s| s.run)
}

/// Look up the subtractive pair that abbreviates an additive run.
#[must_use]
pub fn contraction_of(run: &[Symbol]) -> Option<[Symbol; 2]> {
    SUBTRACTIVES.iter().find(|s| s.run == run).map(|s| s.pair)
}

/// A run of `count` copies of `symbol` is worth exactly one `into`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collapse {
    pub symbol: Symbol,
    pub count: usize,
    pub into: Symbol,
}

/// Duplicate-collapse rules, ordered so that five-symbol runs are tried
/// before two-symbol runs.
pub static COLLAPSES: [Collapse; 6] = [
    Collapse { symbol: I, count: 5, into: V },
    Collapse { symbol: X, count: 5, into: L },
    Collapse { symbol: C, count: 5, into: D },
    Collapse { symbol: V, count: 2, into: X },
    Collapse { symbol: L, count: 2, into: C },
    Collapse { symbol: D, count: 2, into: M },
];

/// Find the collapse rule whose run ends exactly at the end of `symbols`.
///
/// Longer runs are checked first.
#[must_use]
pub fn collapse_ending(symbols: &[Symbol]) -> Option<&'static Collapse> {
    COLLAPSES.iter().find(|rule| {
        symbols.len() >= rule.count
            && symbols[symbols.len() - rule.count..]
                .iter()
                .all(|&s| s == rule.symbol)
    })
}

/// Render a symbol sequence as text.
#[must_use]
pub fn to_text(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}
