//! External trend indicator interface.
//!
//! The band-filtered trend indicator (line plus smoothed average) is a
//! pure function over a close-price series. Its mathematics live in an
//! external collaborator; the engine only consumes the resulting
//! series. Implementations must be deterministic for a given input.

use crate::config::MaVariant;
use rust_decimal::Decimal;

/// Trend line and its smoothed average, aligned with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    /// The trend line itself.
    pub line: Vec<Decimal>,
    /// Smoothed average of the trend input.
    pub mavg: Vec<Decimal>,
}

impl TrendSeries {
    /// Latest trend line value, if the series is non-empty.
    pub fn last_line(&self) -> Option<Decimal> {
        self.line.last().copied()
    }
}

/// External pure trend-indicator function.
pub trait TrendIndicator {
    /// Compute the trend line and smoothed average for `closes`.
    fn trend(
        &self,
        closes: &[Decimal],
        length: usize,
        percent: Decimal,
        ma: MaVariant,
    ) -> TrendSeries;

    /// Compute a standalone smoothing average (short signal MA).
    fn smoothed(&self, closes: &[Decimal], length: usize, ma: MaVariant) -> Vec<Decimal>;
}
