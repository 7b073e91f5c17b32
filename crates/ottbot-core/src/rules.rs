//! Instrument quantization rules.
//!
//! Rules are resolved once from an exchange-info document before the
//! engine is constructed and stay immutable for the life of the
//! instance. Resolution failure is fatal: the engine must not trade an
//! instrument whose precision and minimum size are unknown.

use crate::decimal::quantum;
use crate::error::{CoreError, Result};
use crate::{Price, Qty};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Quantization rules for a single instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentRules {
    /// Decimal places for order quantities.
    pub quantity_precision: u32,
    /// Decimal places for order prices.
    pub price_precision: u32,
    /// Decimal places for quote-currency amounts.
    pub quote_precision: u32,
    /// Minimum tradable quantity.
    pub min_qty: Qty,
}

impl InstrumentRules {
    pub fn new(
        quantity_precision: u32,
        price_precision: u32,
        quote_precision: u32,
        min_qty: Qty,
    ) -> Self {
        Self {
            quantity_precision,
            price_precision,
            quote_precision,
            min_qty,
        }
    }

    /// Resolve rules for `symbol` from an exchange-info JSON document.
    ///
    /// Dashes are stripped from the symbol before matching, so both
    /// "BTC-USDT" and "BTCUSDT" resolve to the same entry. The minimum
    /// quantity is taken from the LOT_SIZE filter.
    pub fn resolve(exchange_info: &str, symbol: &str) -> Result<Self> {
        let info: ExchangeInfo = serde_json::from_str(exchange_info)?;
        let wanted = symbol.replace('-', "");

        let entry = info
            .symbols
            .into_iter()
            .find(|s| s.symbol == wanted)
            .ok_or_else(|| CoreError::SymbolNotFound(wanted.clone()))?;

        let min_qty = entry
            .filters
            .iter()
            .find(|f| f.filter_type == "LOT_SIZE")
            .and_then(|f| f.min_qty.as_deref())
            .ok_or_else(|| {
                CoreError::InvalidRules(format!("{wanted}: missing LOT_SIZE minQty filter"))
            })?;
        let min_qty = Qty::new(Decimal::from_str(min_qty)?);

        Ok(Self {
            quantity_precision: entry.quantity_precision,
            price_precision: entry.price_precision,
            quote_precision: entry.quote_precision,
            min_qty,
        })
    }

    /// Resolve rules from an exchange-info file on disk.
    pub fn resolve_from_file(path: impl AsRef<Path>, symbol: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::RulesUnavailable(format!("{}: {e}", path.display())))?;
        Self::resolve(&content, symbol)
    }

    /// Round a price to the instrument's price precision.
    pub fn round_price(&self, price: Price) -> Price {
        price.round_dp(self.price_precision)
    }

    /// Round a quantity to the instrument's quantity precision.
    pub fn round_qty(&self, qty: Qty) -> Qty {
        qty.round_dp(self.quantity_precision)
    }

    /// Round a take-profit tier quantity.
    ///
    /// Tier quantities are kept one decimal finer than the order
    /// quantity precision so the ladder can reconcile exactly.
    pub fn round_tier_qty(&self, qty: Qty) -> Qty {
        qty.round_dp(self.quantity_precision + 1)
    }

    /// One quantization unit at tier-quantity precision.
    pub fn tier_qty_quantum(&self) -> Decimal {
        quantum(self.quantity_precision + 1)
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeInfo {
    symbols: Vec<SymbolEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolEntry {
    symbol: String,
    quantity_precision: u32,
    price_precision: u32,
    quote_precision: u32,
    #[serde(default)]
    filters: Vec<SymbolFilter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolFilter {
    filter_type: String,
    #[serde(default)]
    min_qty: Option<String>,
}
