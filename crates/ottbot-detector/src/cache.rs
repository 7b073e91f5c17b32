//! Per-bar indicator memoization.
//!
//! Derived indicator series are recomputed once per bar and configuration
//! and cached against the bar index of the last input price, so repeated
//! queries within the same bar hit the cache. The long and short
//! configurations are cached independently.

use crate::config::{LongSignalConfig, ShortSignalConfig};
use crate::indicator::TrendIndicator;
use rust_decimal::Decimal;

/// Long-side indicator snapshot for one bar. Read-only once computed.
#[derive(Debug, Clone, PartialEq)]
pub struct LongSnapshot {
    pub line: Vec<Decimal>,
    pub mavg: Vec<Decimal>,
    pub upper_band: Vec<Decimal>,
}

/// Short-side indicator snapshot for one bar. Read-only once computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortSnapshot {
    pub line: Vec<Decimal>,
    pub signal_ma: Vec<Decimal>,
    pub lower_band: Vec<Decimal>,
}

/// Indicator cache keyed by bar index, one slot per configuration.
///
/// A query for a new bar index invalidates the slot for that
/// configuration; a query for the cached index returns the stored
/// snapshot without touching the indicator.
pub struct IndicatorCache<I: TrendIndicator> {
    indicator: I,
    long_cfg: LongSignalConfig,
    short_cfg: ShortSignalConfig,
    long: Option<(u64, LongSnapshot)>,
    short: Option<(u64, ShortSnapshot)>,
    long_computations: u64,
    short_computations: u64,
}

impl<I: TrendIndicator> IndicatorCache<I> {
    pub fn new(indicator: I, long_cfg: LongSignalConfig, short_cfg: ShortSignalConfig) -> Self {
        Self {
            indicator,
            long_cfg,
            short_cfg,
            long: None,
            short: None,
            long_computations: 0,
            short_computations: 0,
        }
    }

    /// Refresh both snapshots for `bar_index`, recomputing only the
    /// slots whose cached index differs.
    pub fn refresh(&mut self, bar_index: u64, closes: &[Decimal]) -> (&LongSnapshot, &ShortSnapshot) {
        if self.long.as_ref().map(|(i, _)| *i) != Some(bar_index) {
            self.long = Some((bar_index, self.compute_long(closes)));
            self.long_computations += 1;
        }
        if self.short.as_ref().map(|(i, _)| *i) != Some(bar_index) {
            self.short = Some((bar_index, self.compute_short(closes)));
            self.short_computations += 1;
        }

        match (&self.long, &self.short) {
            (Some((_, long)), Some((_, short))) => (long, short),
            _ => unreachable!("both slots populated above"),
        }
    }

    fn compute_long(&self, closes: &[Decimal]) -> LongSnapshot {
        let series = self.indicator.trend(
            closes,
            self.long_cfg.length,
            self.long_cfg.percent,
            self.long_cfg.ma,
        );
        let upper_band = band(&series.line, self.long_cfg.band_bps, true);
        LongSnapshot {
            line: series.line,
            mavg: series.mavg,
            upper_band,
        }
    }

    fn compute_short(&self, closes: &[Decimal]) -> ShortSnapshot {
        let series = self.indicator.trend(
            closes,
            self.short_cfg.length,
            self.short_cfg.percent,
            self.short_cfg.ma,
        );
        let signal_ma =
            self.indicator
                .smoothed(closes, self.short_cfg.signal_ma_length, self.short_cfg.ma);
        let lower_band = band(&series.line, self.short_cfg.band_bps, false);
        ShortSnapshot {
            line: series.line,
            signal_ma,
            lower_band,
        }
    }

    /// Number of long-side recomputations (memoization diagnostics).
    pub fn long_computations(&self) -> u64 {
        self.long_computations
    }

    /// Number of short-side recomputations (memoization diagnostics).
    pub fn short_computations(&self) -> u64 {
        self.short_computations
    }
}

/// Band level: `line * (1 ± bps / 10_000)`.
fn band(line: &[Decimal], bps: u32, upper: bool) -> Vec<Decimal> {
    let offset = Decimal::from(bps) / Decimal::from(10_000);
    let multiplier = if upper {
        Decimal::ONE + offset
    } else {
        Decimal::ONE - offset
    };
    line.iter().map(|v| v * multiplier).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MaVariant;
    use crate::indicator::TrendSeries;
    use rust_decimal_macros::dec;

    /// Pass-through indicator: line = closes, mavg = closes shifted by +1.
    struct PassThrough;

    impl TrendIndicator for PassThrough {
        fn trend(
            &self,
            closes: &[Decimal],
            _length: usize,
            _percent: Decimal,
            _ma: MaVariant,
        ) -> TrendSeries {
            TrendSeries {
                line: closes.to_vec(),
                mavg: closes.iter().map(|c| c + Decimal::ONE).collect(),
            }
        }

        fn smoothed(&self, closes: &[Decimal], _length: usize, _ma: MaVariant) -> Vec<Decimal> {
            closes.to_vec()
        }
    }

    fn cache() -> IndicatorCache<PassThrough> {
        IndicatorCache::new(
            PassThrough,
            LongSignalConfig {
                band_bps: 100,
                ..Default::default()
            },
            ShortSignalConfig {
                band_bps: 200,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_same_bar_index_hits_cache() {
        let mut cache = cache();
        let closes = vec![dec!(100), dec!(101)];

        cache.refresh(7, &closes);
        cache.refresh(7, &closes);
        cache.refresh(7, &closes);

        assert_eq!(cache.long_computations(), 1);
        assert_eq!(cache.short_computations(), 1);
    }

    #[test]
    fn test_new_bar_index_invalidates() {
        let mut cache = cache();
        let closes = vec![dec!(100), dec!(101)];

        cache.refresh(7, &closes);
        cache.refresh(8, &closes);

        assert_eq!(cache.long_computations(), 2);
        assert_eq!(cache.short_computations(), 2);
    }

    #[test]
    fn test_band_levels() {
        let mut cache = cache();
        let closes = vec![dec!(100), dec!(100)];

        let (long, short) = cache.refresh(0, &closes);
        // 100 bps -> 1%
        assert_eq!(long.upper_band, vec![dec!(101.00), dec!(101.00)]);
        // 200 bps -> 2%
        assert_eq!(short.lower_band, vec![dec!(98.00), dec!(98.00)]);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut cache = cache();
        let closes = vec![dec!(10), dec!(20)];

        let (long, short) = cache.refresh(0, &closes);
        assert_eq!(long.line, vec![dec!(10), dec!(20)]);
        assert_eq!(long.mavg, vec![dec!(11), dec!(21)]);
        assert_eq!(short.signal_ma, vec![dec!(10), dec!(20)]);
    }
}
