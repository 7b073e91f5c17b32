//! Run diagnostics.
//!
//! A live watch list for dashboards and a termination summary printed
//! when a run ends.

use crate::state::StrategyState;
use rust_decimal::Decimal;
use std::fmt;

/// Label/value pairs for a live diagnostics display.
pub fn watch_list(symbol: &str, state: &StrategyState) -> Vec<(String, String)> {
    vec![
        ("symbol".to_string(), symbol.to_string()),
        ("longs".to_string(), state.longs.to_string()),
        ("shorts".to_string(), state.shorts.to_string()),
        (
            "long_latch".to_string(),
            if state.long_latch.is_armed() {
                "armed".to_string()
            } else {
                "blocked".to_string()
            },
        ),
    ]
}

/// Entry counters for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub longs: u64,
    pub shorts: u64,
    pub total: u64,
}

impl RunSummary {
    pub fn from_state(state: &StrategyState) -> Self {
        Self {
            longs: state.longs,
            shorts: state.shorts,
            total: state.longs + state.shorts,
        }
    }

    /// Long entries as a fraction of all entries, if any.
    pub fn long_ratio(&self) -> Option<Decimal> {
        if self.total == 0 {
            return None;
        }
        Some(Decimal::from(self.longs) / Decimal::from(self.total))
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.long_ratio() {
            Some(ratio) => write!(
                f,
                "{} entries ({} long / {} short, long ratio {:.2})",
                self.total, self.longs, self.shorts, ratio
            ),
            None => write!(f, "no entries"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_ratio() {
        let mut state = StrategyState::default();
        state.longs = 3;
        state.shorts = 1;

        let summary = RunSummary::from_state(&state);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.long_ratio(), Some(dec!(0.75)));
        assert_eq!(
            summary.to_string(),
            "4 entries (3 long / 1 short, long ratio 0.75)"
        );
    }

    #[test]
    fn test_empty_run() {
        let summary = RunSummary::from_state(&StrategyState::default());
        assert_eq!(summary.long_ratio(), None);
        assert_eq!(summary.to_string(), "no entries");
    }

    #[test]
    fn test_watch_list_labels() {
        let state = StrategyState::default();
        let list = watch_list("BTC-USDT", &state);
        assert_eq!(list[0], ("symbol".to_string(), "BTC-USDT".to_string()));
        assert!(list.iter().any(|(k, v)| k == "long_latch" && v == "armed"));
    }
}
