//! Position state and take-profit ladder construction.
//!
//! A position is opened by an entry fill, reduced tier by tier as the
//! take-profit ladder executes, and closed by the final tier, the
//! protective stop, or a forced liquidation. The ladder is built once
//! per opening; quantities are quantized one decimal place finer than
//! the instrument quantity precision and always sum exactly to the
//! position quantity.

pub mod ladder;
pub mod position;
pub mod splits;

pub use ladder::{Ladder, Reconciliation, TakeProfitLadder};
pub use position::Position;
pub use splits::{tier_split, TIER_COUNT};
