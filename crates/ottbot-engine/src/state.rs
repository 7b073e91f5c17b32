//! Strategy bookkeeping state.
//!
//! The re-entry latch is an explicit two-state edge trigger: an entry
//! consumes the armed state, and only a reverse crossing re-arms it.
//! Historically only the long side ever blocks; the short latch is
//! carried for symmetry and stays armed.

use rust_decimal::Decimal;
use tracing::debug;

/// Edge-trigger latch gating re-entry after a position cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReentryLatch {
    /// Entry allowed on the next qualifying signal.
    #[default]
    Armed,
    /// Entry blocked until a reverse crossing re-arms the latch.
    Blocked,
}

impl ReentryLatch {
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed)
    }

    pub fn block(&mut self) {
        if self.is_armed() {
            debug!("re-entry latch blocked");
        }
        *self = Self::Blocked;
    }

    pub fn arm(&mut self) {
        if !self.is_armed() {
            debug!("re-entry latch re-armed");
        }
        *self = Self::Armed;
    }
}

/// Cumulative counters and balance bookkeeping across the run.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyState {
    /// Long entries filled so far.
    pub longs: u64,
    /// Short entries filled so far.
    pub shorts: u64,
    /// Balance snapshot at the last fill, for slice PnL attribution.
    pub prev_balance: Decimal,
    pub long_latch: ReentryLatch,
    pub short_latch: ReentryLatch,
}

impl Default for StrategyState {
    fn default() -> Self {
        Self {
            longs: 0,
            shorts: 0,
            prev_balance: Decimal::ZERO,
            long_latch: ReentryLatch::Armed,
            short_latch: ReentryLatch::Armed,
        }
    }
}
