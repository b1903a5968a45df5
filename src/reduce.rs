// ➕ Digit-sum reduction
//
// Repeated digit sums down to a single digit, with master numbers
// (11, 22, 33) kept depending on the reduction mode.

use serde::{Deserialize, Serialize};

/// Master numbers that can survive reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// How master numbers are treated while reducing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReduceMode {
    /// Plain digital root. A sum that already is 11, 22 or 33 is kept as is,
    /// but master numbers reached midway are reduced further, so `29` gives
    /// `2` rather than `11`. Only `Mature` and `FinalWay` stop midway; see the
    /// "Master numbers while reducing" entry in DESIGN.md.
    #[default]
    Default,
    /// Maturity number: 11, 22 and 33 are kept whenever they appear.
    Mature,
    /// Fourth "way" number: only 11 and 22 are kept. 33 reduces to 6.
    FinalWay,
}

impl ReduceMode {
    /// Whether `value` stops the reduction under this mode.
    fn keeps(self, value: u32) -> bool {
        match self {
            ReduceMode::Default => false,
            ReduceMode::Mature => MASTER_NUMBERS.contains(&value),
            ReduceMode::FinalWay => value == 11 || value == 22,
        }
    }
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Decimal digits of a one- or two-digit number as `(tens_or_units, units)`.
///
/// `7` splits into `(7, 0)`, `11` into `(1, 1)`.
pub fn split_digits(n: u32) -> (u32, u32) {
    if n > 9 {
        (n / 10, n % 10)
    } else {
        (n, 0)
    }
}

/// Reduce `a + b` to a single digit, keeping master numbers per `mode`.
pub fn reduce(a: u32, b: u32, mode: ReduceMode) -> u32 {
    let mut sum = a.saturating_add(b);

    if mode.keeps(sum) || (mode == ReduceMode::Default && MASTER_NUMBERS.contains(&sum)) {
        return sum;
    }

    while sum > 9 {
        sum = digit_sum(sum);
        if mode.keeps(sum) {
            break;
        }
    }

    sum
}

/// `reduce(a, b, ReduceMode::Default)`.
pub fn reduce_default(a: u32, b: u32) -> u32 {
    reduce(a, b, ReduceMode::Default)
}

/// `|a - b|` without reduction.
pub fn abs_diff(a: u32, b: u32) -> u32 {
    a.abs_diff(b)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(2006), 8);
        assert_eq!(digit_sum(1990), 19);
    }

    #[test]
    fn test_default_is_digital_root() {
        assert_eq!(reduce_default(0, 0), 0);
        assert_eq!(reduce_default(2006, 0), 8);
        assert_eq!(reduce_default(29, 0), 2);
        assert_eq!(reduce_default(1990, 16), 8);
        assert_eq!(reduce_default(9, 9), 9);
    }

    #[test]
    fn test_default_keeps_master_sum() {
        assert_eq!(reduce_default(11, 0), 11);
        assert_eq!(reduce_default(20, 2), 22);
        assert_eq!(reduce_default(30, 3), 33);
    }

    #[test]
    fn test_mature_keeps_masters() {
        assert_eq!(reduce(29, 0, ReduceMode::Mature), 11);
        assert_eq!(reduce(33, 0, ReduceMode::Mature), 33);
        assert_eq!(reduce(6, 5, ReduceMode::Mature), 11);
        assert_eq!(reduce(48, 0, ReduceMode::Mature), 3);
    }

    #[test]
    fn test_final_way_drops_33() {
        assert_eq!(reduce(40, 0, ReduceMode::FinalWay), 4);
        assert_eq!(reduce(33, 0, ReduceMode::FinalWay), 6);
        assert_eq!(reduce(11, 0, ReduceMode::FinalWay), 11);
        assert_eq!(reduce(1, 2008, ReduceMode::FinalWay), 11);
        assert_eq!(reduce_default(1, 2008), 2);
    }

    #[test]
    fn test_large_sums_saturate() {
        // 4294967295 → 57 → 12 → 3
        assert_eq!(reduce_default(u32::MAX, u32::MAX), 3);
        assert!(reduce(u32::MAX, 1, ReduceMode::Mature) <= 33);
    }

    #[test]
    fn test_split_digits() {
        assert_eq!(split_digits(7), (7, 0));
        assert_eq!(split_digits(11), (1, 1));
        assert_eq!(split_digits(33), (3, 3));
    }

    #[test]
    fn test_abs_diff() {
        assert_eq!(abs_diff(1, 15), 14);
        assert_eq!(abs_diff(15, 1), 14);
    }
}
