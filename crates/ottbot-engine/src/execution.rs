//! Broker collaborator interface.
//!
//! The engine never talks to an exchange directly; every order
//! instruction goes through this trait, and fill notifications come
//! back through the engine's `on_position_*` callbacks. Implementations
//! decide transport and order routing.

use crate::error::EngineResult;
use ottbot_core::{EntryOrder, Qty, StopOrder, TakeProfitTier};
use rust_decimal::Decimal;

/// Order placement and account queries.
pub trait ExecutionClient {
    /// Place an entry order. At most one entry is in flight per bar.
    fn place_entry(&mut self, order: &EntryOrder) -> EngineResult<()>;

    /// Cancel the working protective stop, if any, and issue a new one.
    fn replace_stop(&mut self, order: &StopOrder) -> EngineResult<()>;

    /// Place the full take-profit tier set, one batch per opening.
    fn place_take_profits(&mut self, tiers: &[TakeProfitTier]) -> EngineResult<()>;

    /// Market-close `qty` of the open position immediately.
    fn liquidate(&mut self, qty: Qty) -> EngineResult<()>;

    /// Current account balance including realized PnL.
    fn balance(&self) -> EngineResult<Decimal>;

    /// Capital base used for allocation and risk percentages.
    fn capital(&self) -> EngineResult<Decimal>;
}
