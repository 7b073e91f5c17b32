//! Error types for ottbot-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Instrument rules unavailable: {0}")]
    RulesUnavailable(String),

    #[error("Symbol not found in exchange info: {0}")]
    SymbolNotFound(String),

    #[error("Invalid instrument rules: {0}")]
    InvalidRules(String),

    #[error("Decimal parse error: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Exchange info parse error: {0}")]
    ExchangeInfoParse(#[from] serde_json::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
