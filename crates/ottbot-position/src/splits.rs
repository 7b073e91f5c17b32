//! Built-in tier quantity split table.
//!
//! Each row distributes the position quantity across the five
//! take-profit tiers; every row sums to one. The configured split
//! index selects a row modulo the table length, so any historical
//! index value maps onto a valid row.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Number of take-profit tiers per position.
pub const TIER_COUNT: usize = 5;

const SPLITS: [[Decimal; TIER_COUNT]; 8] = [
    [dec!(0.20), dec!(0.20), dec!(0.20), dec!(0.20), dec!(0.20)],
    [dec!(0.30), dec!(0.25), dec!(0.20), dec!(0.15), dec!(0.10)],
    [dec!(0.10), dec!(0.15), dec!(0.20), dec!(0.25), dec!(0.30)],
    [dec!(0.40), dec!(0.25), dec!(0.15), dec!(0.10), dec!(0.10)],
    [dec!(0.10), dec!(0.10), dec!(0.15), dec!(0.25), dec!(0.40)],
    [dec!(0.25), dec!(0.25), dec!(0.20), dec!(0.15), dec!(0.15)],
    [dec!(0.15), dec!(0.20), dec!(0.30), dec!(0.20), dec!(0.15)],
    [dec!(0.35), dec!(0.30), dec!(0.20), dec!(0.10), dec!(0.05)],
];

/// Weight row for a configured split index.
pub fn tier_split(index: usize) -> &'static [Decimal; TIER_COUNT] {
    &SPLITS[index % SPLITS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_sums_to_one() {
        for (i, row) in SPLITS.iter().enumerate() {
            let sum: Decimal = row.iter().sum();
            assert_eq!(sum, Decimal::ONE, "row {i} does not sum to 1");
        }
    }

    #[test]
    fn test_index_wraps_modulo_table_length() {
        assert_eq!(tier_split(0), tier_split(SPLITS.len()));
        assert_eq!(tier_split(64), tier_split(64 % SPLITS.len()));
    }

    #[test]
    fn test_uniform_row() {
        let row = tier_split(0);
        assert!(row.iter().all(|w| *w == dec!(0.20)));
    }
}
