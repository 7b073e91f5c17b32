//! Indicator memoization and crossover signal detection.
//!
//! The trend/moving-average mathematics themselves are supplied by an
//! external collaborator through the [`TrendIndicator`] trait; this
//! crate caches the per-bar series and derives directional crossing
//! events from them.

pub mod cache;
pub mod config;
pub mod crossing;
pub mod indicator;
pub mod signal;

pub use cache::{IndicatorCache, LongSnapshot, ShortSnapshot};
pub use config::{LongSignalConfig, MaVariant, ShortSignalConfig};
pub use crossing::{crossed_above, crossed_below};
pub use indicator::{TrendIndicator, TrendSeries};
pub use signal::{BarSignals, SignalDetector};
