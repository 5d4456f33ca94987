//! Error Types for the Yield Advisor
//!
//! Errors are data: every operation that depends on unloaded state returns
//! a structured error the serving layer can render, never a panic.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Market data not loaded")]
    MarketDataNotLoaded,

    #[error("No yield predictions available")]
    ForecastUnavailable,

    #[error("Strategy not found: {0}")]
    StrategyNotFound(String),

    #[error("Market data source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
