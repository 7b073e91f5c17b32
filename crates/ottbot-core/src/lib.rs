//! Core domain types for the OTT band position engine.
//!
//! This crate provides fundamental types used throughout the strategy:
//! - `Price`, `Qty`: precision-safe numeric types
//! - `Bar`, `BarWindow`: candle history with a fixed trailing window
//! - `InstrumentRules`: exchange quantization rules (precision, min qty)
//! - `Direction`, order payloads, and fill notifications

pub mod bar;
pub mod decimal;
pub mod error;
pub mod order;
pub mod rules;

pub use bar::{Bar, BarWindow};
pub use decimal::{Price, Qty};
pub use error::{CoreError, Result};
pub use order::{Direction, EntryOrder, Fill, StopOrder, TakeProfitTier};
pub use rules::InstrumentRules;
