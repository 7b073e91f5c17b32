//! Per-direction signal configuration.
//!
//! Defaults match the tuned parameter set the strategy ships with.
//! Band offsets are expressed in basis points and divided by 10,000
//! when the band levels are derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Smoothing-average variant forwarded to the external indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaVariant {
    #[default]
    Kama,
    Ema,
    Sma,
}

/// Long-side signal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongSignalConfig {
    /// Trend indicator length.
    #[serde(default = "default_long_length")]
    pub length: usize,
    /// Trend indicator percent parameter.
    #[serde(default = "default_long_percent")]
    pub percent: Decimal,
    /// Upper band offset in basis points.
    #[serde(default = "default_long_band_bps")]
    pub band_bps: u32,
    /// Smoothing-average variant.
    #[serde(default)]
    pub ma: MaVariant,
}

fn default_long_length() -> usize {
    70
}

fn default_long_percent() -> Decimal {
    Decimal::new(170, 2) // 1.70
}

fn default_long_band_bps() -> u32 {
    135
}

impl Default for LongSignalConfig {
    fn default() -> Self {
        Self {
            length: default_long_length(),
            percent: default_long_percent(),
            band_bps: default_long_band_bps(),
            ma: MaVariant::default(),
        }
    }
}

/// Short-side signal configuration.
///
/// The short side crosses a separately smoothed signal average against
/// the trend line and lower band, so it carries its own MA length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortSignalConfig {
    /// Trend indicator length.
    #[serde(default = "default_short_length")]
    pub length: usize,
    /// Trend indicator percent parameter.
    #[serde(default = "default_short_percent")]
    pub percent: Decimal,
    /// Lower band offset in basis points.
    #[serde(default = "default_short_band_bps")]
    pub band_bps: u32,
    /// Length of the short signal moving average.
    #[serde(default = "default_signal_ma_length")]
    pub signal_ma_length: usize,
    /// Smoothing-average variant.
    #[serde(default)]
    pub ma: MaVariant,
}

fn default_short_length() -> usize {
    31
}

fn default_short_percent() -> Decimal {
    Decimal::new(333, 2) // 3.33
}

fn default_short_band_bps() -> u32 {
    184
}

fn default_signal_ma_length() -> usize {
    59
}

impl Default for ShortSignalConfig {
    fn default() -> Self {
        Self {
            length: default_short_length(),
            percent: default_short_percent(),
            band_bps: default_short_band_bps(),
            signal_ma_length: default_signal_ma_length(),
            ma: MaVariant::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_tuned_parameters() {
        let long = LongSignalConfig::default();
        assert_eq!(long.length, 70);
        assert_eq!(long.percent, dec!(1.70));
        assert_eq!(long.band_bps, 135);

        let short = ShortSignalConfig::default();
        assert_eq!(short.length, 31);
        assert_eq!(short.percent, dec!(3.33));
        assert_eq!(short.band_bps, 184);
        assert_eq!(short.signal_ma_length, 59);
    }
}
