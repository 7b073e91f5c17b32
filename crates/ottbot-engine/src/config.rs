//! Strategy configuration.
//!
//! Defaults mirror the tuned parameter set the strategy ships with.
//! Loadable from TOML; `validate` runs before engine construction.

use crate::error::{EngineError, EngineResult};
use ottbot_detector::{LongSignalConfig, ShortSignalConfig};
use ottbot_position::TIER_COUNT;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-direction signal parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalConfig {
    #[serde(default)]
    pub long: LongSignalConfig,
    #[serde(default)]
    pub short: ShortSignalConfig,
}

/// Risk ceilings and tier-split selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Maximum long-entry risk in percent of capital.
    #[serde(default = "default_max_risk_long")]
    pub max_risk_long: Decimal,
    /// Maximum short-entry risk in percent of capital.
    #[serde(default = "default_max_risk_short")]
    pub max_risk_short: Decimal,
    /// Tier-split table row for long positions.
    #[serde(default = "default_split_index_long")]
    pub split_index_long: usize,
    /// Tier-split table row for short positions.
    #[serde(default = "default_split_index_short")]
    pub split_index_short: usize,
}

fn default_max_risk_long() -> Decimal {
    dec!(5.2)
}

fn default_max_risk_short() -> Decimal {
    dec!(4.6)
}

fn default_split_index_long() -> usize {
    64
}

fn default_split_index_short() -> usize {
    51
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            max_risk_long: default_max_risk_long(),
            max_risk_short: default_max_risk_short(),
            split_index_long: default_split_index_long(),
            split_index_short: default_split_index_short(),
        }
    }
}

/// Top-level strategy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Instrument symbol (e.g. "BTC-USDT").
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_leverage")]
    pub leverage: Decimal,
    /// Exchange taker fee rate as a fraction.
    #[serde(default = "default_fee_rate")]
    pub fee_rate: Decimal,
    /// Fraction of capital allocated per position.
    #[serde(default = "default_allocation_fraction")]
    pub allocation_fraction: Decimal,
    /// Bars required before the first signal evaluation.
    #[serde(default = "default_warmup_bars")]
    pub warmup_bars: usize,
    #[serde(default)]
    pub signal: SignalConfig,
    #[serde(default)]
    pub risk: RiskConfig,
    /// Fractional take-profit offsets, strictly ascending.
    #[serde(default = "default_ladder_percents")]
    pub ladder_percents: Vec<Decimal>,
}

fn default_symbol() -> String {
    "BTC-USDT".to_string()
}

fn default_leverage() -> Decimal {
    dec!(10)
}

fn default_fee_rate() -> Decimal {
    dec!(0.00045)
}

fn default_allocation_fraction() -> Decimal {
    dec!(0.1)
}

fn default_warmup_bars() -> usize {
    240
}

fn default_ladder_percents() -> Vec<Decimal> {
    vec![dec!(0.01), dec!(0.02), dec!(0.03), dec!(0.05), dec!(0.08)]
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            leverage: default_leverage(),
            fee_rate: default_fee_rate(),
            allocation_fraction: default_allocation_fraction(),
            warmup_bars: default_warmup_bars(),
            signal: SignalConfig::default(),
            risk: RiskConfig::default(),
            ladder_percents: default_ladder_percents(),
        }
    }
}

impl StrategyConfig {
    /// Load configuration from the path in `OTTBOT_CONFIG`, falling
    /// back to defaults when no file exists.
    pub fn load() -> EngineResult<Self> {
        let config_path =
            std::env::var("OTTBOT_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("failed to read config: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| EngineError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.leverage <= Decimal::ZERO {
            return Err(EngineError::Config("leverage must be positive".into()));
        }
        if self.allocation_fraction <= Decimal::ZERO || self.allocation_fraction > Decimal::ONE {
            return Err(EngineError::Config(
                "allocation_fraction must be in (0, 1]".into(),
            ));
        }
        if self.fee_rate < Decimal::ZERO {
            return Err(EngineError::Config("fee_rate must be non-negative".into()));
        }
        if self.ladder_percents.len() != TIER_COUNT {
            return Err(EngineError::Config(format!(
                "ladder_percents must have {TIER_COUNT} entries, got {}",
                self.ladder_percents.len()
            )));
        }
        let ascending = self
            .ladder_percents
            .windows(2)
            .all(|pair| pair[0] < pair[1]);
        if !ascending || self.ladder_percents[0] <= Decimal::ZERO {
            return Err(EngineError::Config(
                "ladder_percents must be positive and strictly ascending".into(),
            ));
        }
        if self.warmup_bars < 2 {
            return Err(EngineError::Config(
                "warmup_bars must be at least 2 for crossing detection".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = StrategyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.leverage, dec!(10));
        assert_eq!(config.allocation_fraction, dec!(0.1));
        assert_eq!(config.risk.max_risk_long, dec!(5.2));
        assert_eq!(config.risk.max_risk_short, dec!(4.6));
    }

    #[test]
    fn test_rejects_descending_ladder() {
        let mut config = StrategyConfig::default();
        config.ladder_percents = vec![dec!(0.08), dec!(0.05), dec!(0.03), dec!(0.02), dec!(0.01)];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_wrong_tier_count() {
        let mut config = StrategyConfig::default();
        config.ladder_percents = vec![dec!(0.01), dec!(0.02)];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_fraction() {
        let mut config = StrategyConfig::default();
        config.allocation_fraction = dec!(1.5);
        assert!(config.validate().is_err());

        config.allocation_fraction = Decimal::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_with_partial_file() {
        let toml_str = r#"
            symbol = "ETH-USDT"
            leverage = "5"

            [risk]
            max_risk_long = "3.0"
        "#;
        let config: StrategyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.symbol, "ETH-USDT");
        assert_eq!(config.leverage, dec!(5));
        assert_eq!(config.risk.max_risk_long, dec!(3.0));
        // Unspecified fields fall back to defaults.
        assert_eq!(config.risk.max_risk_short, dec!(4.6));
        assert_eq!(config.warmup_bars, 240);
    }
}
