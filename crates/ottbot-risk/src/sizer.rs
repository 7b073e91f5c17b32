//! Notional-to-quantity conversion.
//!
//! Sizing pipeline, in order:
//! 1. shave a three-fee buffer off the allocation so entry, stop and
//!    exit fees never push margin use past the allocation;
//! 2. divide by price and truncate to quantity precision;
//! 3. apply leverage and round to quantity precision;
//! 4. floor the result to the instrument minimum quantity.
//!
//! Truncation happens before leverage so the position is never
//! oversized; the final banker's rounding only cleans up the scale.

use ottbot_core::{InstrumentRules, Price, Qty};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Converts a notional allocation into an exchange-valid quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizer {
    pub leverage: Decimal,
    pub fee_rate: Decimal,
}

impl PositionSizer {
    pub fn new(leverage: Decimal, fee_rate: Decimal) -> Self {
        Self { leverage, fee_rate }
    }

    /// Quantity for `allocation` at `price` under `rules`.
    ///
    /// Returns `Qty::ZERO` for a non-positive price.
    pub fn qty(&self, allocation: Decimal, price: Price, rules: &InstrumentRules) -> Qty {
        if !price.is_positive() {
            return Qty::ZERO;
        }

        let buffered = allocation * (Decimal::ONE - Decimal::from(3) * self.fee_rate);
        let base = Qty::new(buffered / price.inner()).floor_dp(rules.quantity_precision);
        let levered = (base * self.leverage).round_dp(rules.quantity_precision);
        let qty = levered.max(rules.min_qty);
        trace!(%allocation, %price, %qty, "sized entry quantity");
        qty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rules(quantity_precision: u32, min_qty: Decimal) -> InstrumentRules {
        InstrumentRules {
            quantity_precision,
            price_precision: 2,
            quote_precision: 2,
            min_qty: Qty::new(min_qty),
        }
    }

    #[test]
    fn test_reference_sizing() {
        // capital 10_000, allocation 1_000, 10x leverage at price 100:
        // a ~10_000 notional position at 3-decimal precision.
        let sizer = PositionSizer::new(dec!(10), dec!(0.00045));
        let qty = sizer.qty(dec!(1000), Price::new(dec!(100)), &rules(3, dec!(0.001)));

        // 1000 * (1 - 0.00135) = 998.65; /100 = 9.9865 -> 9.986; x10 = 99.86
        assert_eq!(qty, Qty::new(dec!(99.86)));
        assert!(qty >= rules(3, dec!(0.001)).min_qty);
        // Notional stays just under the levered allocation.
        assert!(qty.notional(Price::new(dec!(100))) <= dec!(10000));
    }

    #[test]
    fn test_zero_fee_rate() {
        let sizer = PositionSizer::new(dec!(10), Decimal::ZERO);
        let qty = sizer.qty(dec!(1000), Price::new(dec!(100)), &rules(3, dec!(0.001)));
        assert_eq!(qty, Qty::new(dec!(100)));
    }

    #[test]
    fn test_truncation_never_oversizes() {
        let sizer = PositionSizer::new(dec!(10), Decimal::ZERO);
        // 1000 / 317 = 3.154574... -> truncates to 3.154, never 3.155.
        let qty = sizer.qty(dec!(1000), Price::new(dec!(317)), &rules(3, dec!(0.001)));
        assert_eq!(qty, Qty::new(dec!(31.54)));
    }

    #[test]
    fn test_min_qty_floor() {
        let sizer = PositionSizer::new(dec!(1), Decimal::ZERO);
        // Tiny allocation sizes below the exchange minimum.
        let qty = sizer.qty(dec!(1), Price::new(dec!(50000)), &rules(3, dec!(0.001)));
        assert_eq!(qty, Qty::new(dec!(0.001)));
    }

    #[test]
    fn test_monotonic_in_allocation() {
        let sizer = PositionSizer::new(dec!(10), dec!(0.00045));
        let rules = rules(3, dec!(0.001));
        let price = Price::new(dec!(137.21));

        let mut prev = Qty::ZERO;
        for allocation in [dec!(10), dec!(100), dec!(500), dec!(1000), dec!(5000)] {
            let qty = sizer.qty(allocation, price, &rules);
            assert!(qty >= prev, "allocation {allocation} shrank quantity");
            prev = qty;
        }
    }

    #[test]
    fn test_zero_price_yields_zero() {
        let sizer = PositionSizer::new(dec!(10), dec!(0.00045));
        let qty = sizer.qty(dec!(1000), Price::ZERO, &rules(3, dec!(0.001)));
        assert!(qty.is_zero());
    }
}
