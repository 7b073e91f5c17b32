//! Per-direction risk ceiling gate.
//!
//! The gate bounds the fraction of account capital that a stop-out
//! would realize. Margin deployed is `allocation * leverage`; the
//! amount at risk is the stop distance as a fraction of the entry
//! price applied to that margin. The resulting percentage of capital
//! must stay at or below the per-direction ceiling.
//!
//! A blocked entry is a no-op for the caller: no retry state, no
//! queued order. The next qualifying signal is evaluated afresh.

use ottbot_core::{Direction, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Outcome of a risk-ceiling check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateResult {
    /// Entry allowed at the computed risk percentage.
    Pass { risk_pct: Decimal },
    /// Entry blocked: risk percentage exceeds the direction's ceiling.
    Block { risk_pct: Decimal, ceiling: Decimal },
}

impl GateResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// Risk percentage computed for the check, pass or block.
    pub fn risk_pct(&self) -> Decimal {
        match self {
            Self::Pass { risk_pct } | Self::Block { risk_pct, .. } => *risk_pct,
        }
    }
}

/// Risk ceilings in percent of capital, one per direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskGate {
    pub max_risk_long: Decimal,
    pub max_risk_short: Decimal,
}

impl RiskGate {
    pub fn new(max_risk_long: Decimal, max_risk_short: Decimal) -> Self {
        Self {
            max_risk_long,
            max_risk_short,
        }
    }

    /// Check a candidate entry against the direction's ceiling.
    ///
    /// Degenerate inputs (non-positive capital or price) block
    /// unconditionally.
    pub fn check(
        &self,
        direction: Direction,
        allocation: Decimal,
        capital: Decimal,
        leverage: Decimal,
        price: Price,
        stop: Price,
    ) -> GateResult {
        let ceiling = match direction {
            Direction::Long => self.max_risk_long,
            Direction::Short => self.max_risk_short,
        };

        if capital <= Decimal::ZERO || !price.is_positive() {
            trace!(%direction, %capital, %price, "risk gate blocked on degenerate input");
            return GateResult::Block {
                risk_pct: Decimal::MAX,
                ceiling,
            };
        }

        let margin = allocation * leverage;
        let risk = margin * price.distance(stop) / price.inner();
        let risk_pct = risk / capital * Decimal::from(100);

        if risk_pct <= ceiling {
            trace!(%direction, %risk_pct, %ceiling, "risk gate passed");
            GateResult::Pass { risk_pct }
        } else {
            trace!(%direction, %risk_pct, %ceiling, "risk gate blocked");
            GateResult::Block { risk_pct, ceiling }
        }
    }
}
