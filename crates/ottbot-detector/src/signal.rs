//! Crossover signal evaluation.
//!
//! Four directional events are derived from the cached snapshots:
//!
//! * long entry: smoothed trend average crosses above the upper band
//! * long reverse: smoothed trend average crosses below the trend line
//! * short entry: signal MA crosses below the lower band
//! * short reverse: signal MA crosses above the trend line
//!
//! Evaluation is stateless; signals reflect only the last two samples
//! of each series for the current bar.

use crate::cache::{LongSnapshot, ShortSnapshot};
use crate::crossing::{crossed_above, crossed_below};
use tracing::debug;

/// All four signal outcomes for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarSignals {
    pub long_entry: bool,
    pub long_reverse: bool,
    pub short_entry: bool,
    pub short_reverse: bool,
}

/// Stateless signal evaluator over indicator snapshots.
pub struct SignalDetector;

impl SignalDetector {
    /// Smoothed trend average crossed above the upper band.
    pub fn long_entry(snapshot: &LongSnapshot) -> bool {
        crossed_above(&snapshot.mavg, &snapshot.upper_band)
    }

    /// Smoothed trend average crossed below the trend line.
    pub fn long_reverse(snapshot: &LongSnapshot) -> bool {
        crossed_below(&snapshot.mavg, &snapshot.line)
    }

    /// Signal MA crossed below the lower band.
    pub fn short_entry(snapshot: &ShortSnapshot) -> bool {
        crossed_below(&snapshot.signal_ma, &snapshot.lower_band)
    }

    /// Signal MA crossed above the trend line.
    pub fn short_reverse(snapshot: &ShortSnapshot) -> bool {
        crossed_above(&snapshot.signal_ma, &snapshot.line)
    }

    /// Evaluate all four signals for the current bar.
    pub fn evaluate(long: &LongSnapshot, short: &ShortSnapshot) -> BarSignals {
        let signals = BarSignals {
            long_entry: Self::long_entry(long),
            long_reverse: Self::long_reverse(long),
            short_entry: Self::short_entry(short),
            short_reverse: Self::short_reverse(short),
        };
        if signals.long_entry || signals.long_reverse || signals.short_entry || signals.short_reverse
        {
            debug!(
                long_entry = signals.long_entry,
                long_reverse = signals.long_reverse,
                short_entry = signals.short_entry,
                short_reverse = signals.short_reverse,
                "crossover signals fired"
            );
        }
        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn long_snapshot(
        mavg: &[Decimal],
        line: &[Decimal],
        upper_band: &[Decimal],
    ) -> LongSnapshot {
        LongSnapshot {
            line: line.to_vec(),
            mavg: mavg.to_vec(),
            upper_band: upper_band.to_vec(),
        }
    }

    fn short_snapshot(
        signal_ma: &[Decimal],
        line: &[Decimal],
        lower_band: &[Decimal],
    ) -> ShortSnapshot {
        ShortSnapshot {
            line: line.to_vec(),
            signal_ma: signal_ma.to_vec(),
            lower_band: lower_band.to_vec(),
        }
    }

    #[test]
    fn test_long_entry_on_upper_band_cross() {
        let snap = long_snapshot(
            &[dec!(100), dec!(103)],
            &[dec!(100), dec!(100)],
            &[dec!(101), dec!(101)],
        );
        assert!(SignalDetector::long_entry(&snap));
        assert!(!SignalDetector::long_reverse(&snap));
    }

    #[test]
    fn test_long_reverse_on_line_cross() {
        let snap = long_snapshot(
            &[dec!(102), dec!(99)],
            &[dec!(100), dec!(100)],
            &[dec!(101), dec!(101)],
        );
        assert!(SignalDetector::long_reverse(&snap));
        assert!(!SignalDetector::long_entry(&snap));
    }

    #[test]
    fn test_short_entry_on_lower_band_cross() {
        let snap = short_snapshot(
            &[dec!(100), dec!(97)],
            &[dec!(100), dec!(100)],
            &[dec!(98), dec!(98)],
        );
        assert!(SignalDetector::short_entry(&snap));
        assert!(!SignalDetector::short_reverse(&snap));
    }

    #[test]
    fn test_short_reverse_on_line_cross() {
        let snap = short_snapshot(
            &[dec!(99), dec!(101)],
            &[dec!(100), dec!(100)],
            &[dec!(98), dec!(98)],
        );
        assert!(SignalDetector::short_reverse(&snap));
        assert!(!SignalDetector::short_entry(&snap));
    }

    #[test]
    fn test_band_crossing_alone_is_not_entry() {
        // The average crossed the trend line but not the band: no entry.
        let snap = long_snapshot(
            &[dec!(99), dec!(100.5)],
            &[dec!(100), dec!(100)],
            &[dec!(101), dec!(101)],
        );
        assert!(!SignalDetector::long_entry(&snap));
    }

    #[test]
    fn test_evaluate_bundles_all_signals() {
        let long = long_snapshot(
            &[dec!(100), dec!(103)],
            &[dec!(100), dec!(100)],
            &[dec!(101), dec!(101)],
        );
        let short = short_snapshot(
            &[dec!(99), dec!(101)],
            &[dec!(100), dec!(100)],
            &[dec!(98), dec!(98)],
        );
        let signals = SignalDetector::evaluate(&long, &short);
        assert!(signals.long_entry);
        assert!(!signals.long_reverse);
        assert!(!signals.short_entry);
        assert!(signals.short_reverse);
    }
}
