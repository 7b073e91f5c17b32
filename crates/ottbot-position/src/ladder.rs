//! Take-profit ladder construction and reconciliation.
//!
//! Tier prices step away from the entry by fixed percentages; tier
//! quantities follow the configured weight split, quantized one
//! decimal finer than the instrument quantity precision. The final
//! tier is the exact remainder of the position quantity, so the
//! ladder sums to the position quantity by construction. The
//! remainder is then reconciled against the weight-implied final
//! quantity to surface quantization drift.

use ottbot_core::{Direction, InstrumentRules, Price, Qty, TakeProfitTier};
use rust_decimal::Decimal;
use tracing::warn;

/// How the remainder-derived final tier compared to the weight-implied
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Remainder equals the weight-implied quantity.
    Exact,
    /// Off by at most one quantization unit; expected rounding drift.
    Reconciled,
    /// Off by more than one quantization unit; inputs are inconsistent.
    Suspect,
}

/// A built ladder: tier orders plus the reconciliation verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Ladder {
    pub tiers: Vec<TakeProfitTier>,
    pub reconciliation: Reconciliation,
}

impl Ladder {
    /// Sum of all tier quantities.
    pub fn total_qty(&self) -> Qty {
        self.tiers
            .iter()
            .fold(Qty::ZERO, |acc, tier| acc + tier.qty)
    }
}

/// Ladder builder.
pub struct TakeProfitLadder;

impl TakeProfitLadder {
    /// Build the tier set for a freshly opened position.
    ///
    /// `percents` are fractional price offsets (0.01 = 1%), strictly
    /// ascending; `weights` distribute `total_qty` across the tiers and
    /// must be the same length. The ladder is used as computed for all
    /// three reconciliation outcomes.
    pub fn build(
        direction: Direction,
        entry: Price,
        total_qty: Qty,
        percents: &[Decimal],
        weights: &[Decimal],
        rules: &InstrumentRules,
    ) -> Ladder {
        debug_assert_eq!(percents.len(), weights.len());

        let mut tiers = Vec::with_capacity(percents.len());
        let mut allotted = Qty::ZERO;
        let mut reconciliation = Reconciliation::Exact;

        for (i, (pct, weight)) in percents.iter().zip(weights).enumerate() {
            let offset = match direction {
                Direction::Long => Decimal::ONE + pct,
                Direction::Short => Decimal::ONE - pct,
            };
            let price = rules.round_price(entry * offset);

            let last = i == percents.len() - 1;
            let implied = rules.round_tier_qty(total_qty * *weight);
            let qty = if last {
                let remainder = total_qty - allotted;
                reconciliation = Self::verdict(remainder, implied, rules);
                match reconciliation {
                    Reconciliation::Exact => {}
                    Reconciliation::Reconciled => {
                        warn!(%remainder, %implied, "final tier absorbed rounding drift");
                    }
                    Reconciliation::Suspect => {
                        warn!(
                            %remainder, %implied,
                            "final tier diverges beyond one quantization unit; check split weights"
                        );
                    }
                }
                remainder
            } else {
                allotted = allotted + implied;
                implied
            };

            tiers.push(TakeProfitTier { qty, price });
        }

        Ladder {
            tiers,
            reconciliation,
        }
    }

    fn verdict(remainder: Qty, implied: Qty, rules: &InstrumentRules) -> Reconciliation {
        let diff = (remainder.inner() - implied.inner()).abs();
        if diff.is_zero() {
            Reconciliation::Exact
        } else if diff <= rules.tier_qty_quantum() {
            Reconciliation::Reconciled
        } else {
            Reconciliation::Suspect
        }
    }
}
