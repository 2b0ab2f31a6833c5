//! Configuration constants for the Roman numeral engine
//!
//! The representable range is fixed at compile time. There is no symbol for
//! 5000 in the basic alphabet, so at most four `M` may lead a numeral and
//! the largest canonical numeral is `MMMMCMXCIX`.

/// Smallest representable value (`I`).
pub const MIN_VALUE: u16 = 1;

/// Largest representable value (`MMMMCMXCIX`).
pub const MAX_VALUE: u16 = 4999;

/// Maximum number of leading `M` symbols in a canonical numeral.
pub const MAX_THOUSANDS: usize = 4;

/// Canonical Roman numeral grammar for values 1..=4999.
///
/// Note that this pattern also matches the empty string; callers reject
/// empty input separately.
pub const NUMERAL_PATTERN: &str = r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

/// Largest numeral in range, used by boundary checks.
pub const MAX_NUMERAL: &str = "MMMMCMXCIX";
