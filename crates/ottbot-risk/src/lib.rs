//! Pre-trade risk controls.
//!
//! Two independent checks run before any entry order is placed:
//! - [`RiskGate`]: caps the capital fraction at risk between the
//!   candidate entry price and its protective stop.
//! - [`PositionSizer`]: converts a notional allocation into an
//!   exchange-valid order quantity.
//!
//! Both are pure calculations over decimal inputs; neither holds
//! market state.

pub mod gate;
pub mod sizer;

pub use gate::{GateResult, RiskGate};
pub use sizer::PositionSizer;
