//! Open position state.
//!
//! A `Position` exists only between an entry fill and a full close.
//! All mutation flows through `apply_reduction`; the lifecycle engine
//! owns the `Option<Position>` slot and drops it on close.

use crate::splits::TIER_COUNT;
use ottbot_core::{Direction, Price, Qty, TakeProfitTier};
use tracing::debug;

/// One open position and its exit plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub direction: Direction,
    pub entry_price: Price,
    /// Remaining quantity, reduced tier by tier.
    pub qty: Qty,
    /// Quantity at the entry fill, for PnL attribution.
    pub initial_qty: Qty,
    /// Cycle stop price, fixed at entry for the life of the position.
    pub stop_price: Price,
    pub tiers: Vec<TakeProfitTier>,
    /// Take-profit tiers filled so far, capped at [`TIER_COUNT`].
    pub tiers_hit: usize,
}

impl Position {
    pub fn new(
        direction: Direction,
        entry_price: Price,
        qty: Qty,
        stop_price: Price,
        tiers: Vec<TakeProfitTier>,
    ) -> Self {
        Self {
            direction,
            entry_price,
            qty,
            initial_qty: qty,
            stop_price,
            tiers,
            tiers_hit: 0,
        }
    }

    /// Remaining quantity; the protective stop must always be sized to
    /// this value.
    pub fn remaining(&self) -> Qty {
        self.qty
    }

    pub fn is_closed(&self) -> bool {
        self.qty.is_zero()
    }

    /// Apply a take-profit reduction fill.
    ///
    /// Clamps at zero (a fill can never drive the position negative)
    /// and counts one tier hit, capped at [`TIER_COUNT`].
    pub fn apply_reduction(&mut self, fill_qty: Qty) -> Qty {
        let reduced = if fill_qty >= self.qty {
            Qty::ZERO
        } else {
            self.qty - fill_qty
        };
        self.qty = reduced;
        self.tiers_hit = (self.tiers_hit + 1).min(TIER_COUNT);
        debug!(
            direction = %self.direction,
            remaining = %self.qty,
            tiers_hit = self.tiers_hit,
            "position reduced"
        );
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn position(qty: Decimal) -> Position {
        Position::new(
            Direction::Long,
            Price::new(dec!(100)),
            Qty::new(qty),
            Price::new(dec!(97)),
            Vec::new(),
        )
    }

    #[test]
    fn test_reduction_tracks_remaining() {
        let mut pos = position(dec!(50));
        assert_eq!(pos.apply_reduction(Qty::new(dec!(10))), Qty::new(dec!(40)));
        assert_eq!(pos.apply_reduction(Qty::new(dec!(10))), Qty::new(dec!(30)));
        assert_eq!(pos.remaining(), Qty::new(dec!(30)));
        assert_eq!(pos.tiers_hit, 2);
        assert_eq!(pos.initial_qty, Qty::new(dec!(50)));
    }

    #[test]
    fn test_reduction_clamps_at_zero() {
        let mut pos = position(dec!(5));
        assert_eq!(pos.apply_reduction(Qty::new(dec!(9))), Qty::ZERO);
        assert!(pos.is_closed());
    }

    #[test]
    fn test_tiers_hit_caps_at_tier_count() {
        let mut pos = position(dec!(50));
        for _ in 0..8 {
            pos.apply_reduction(Qty::new(dec!(1)));
        }
        assert_eq!(pos.tiers_hit, TIER_COUNT);
    }
}
