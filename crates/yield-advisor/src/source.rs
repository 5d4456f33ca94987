//! Market Data Sources
//!
//! Abstraction over where a `MarketSnapshot` comes from. The engine makes
//! no assumption about the origin - live feed, file, or test fixture all
//! satisfy the same trait.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;

use crate::error::Result;
use crate::model::MarketSnapshot;

/// Market data source trait (Strategy pattern)
///
/// Implement this for each origin: an indexer, an exchange API, a file.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch a fresh snapshot of the tokenized yield markets
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot>;

    /// Source name for logs and health output
    fn name(&self) -> &str;
}

/// The reference market conditions used throughout tests and demos:
/// 4.5% BTC yield, 7.8% CORE yield, PT tokens at a slight discount to
/// face value, quarterly maturities.
pub fn reference_snapshot() -> MarketSnapshot {
    let maturities = [(3, 31), (6, 30), (9, 30), (12, 31)]
        .into_iter()
        .filter_map(|(m, d)| NaiveDate::from_ymd_opt(2025, m, d))
        .collect();

    MarketSnapshot {
        btc_yield: dec!(0.045),
        core_yield: dec!(0.078),
        pt_btc_price: dec!(0.965),
        pt_core_price: dec!(0.942),
        yt_btc_price: dec!(0.035),
        yt_core_price: dec!(0.062),
        available_maturities: maturities,
        as_of: Utc::now(),
    }
}

/// Fixture source with static reference data.
///
/// For testing and demo purposes; the snapshot can be overridden to drive
/// specific market scenarios.
pub struct FixtureSource {
    snapshot: MarketSnapshot,
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureSource {
    pub fn new() -> Self {
        Self {
            snapshot: reference_snapshot(),
        }
    }

    pub fn with_snapshot(snapshot: MarketSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl MarketDataSource for FixtureSource {
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot> {
        let mut snapshot = self.snapshot.clone();
        snapshot.as_of = Utc::now();
        Ok(snapshot)
    }

    fn name(&self) -> &str {
        "FixtureSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_source_returns_reference_data() {
        let source = FixtureSource::new();

        let snapshot = source.fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.btc_yield, dec!(0.045));
        assert_eq!(snapshot.core_yield, dec!(0.078));
        assert_eq!(snapshot.available_maturities.len(), 4);
    }

    #[tokio::test]
    async fn test_fixture_source_override() {
        let mut snapshot = reference_snapshot();
        snapshot.btc_yield = dec!(0.09);
        let source = FixtureSource::with_snapshot(snapshot);

        let fetched = source.fetch_snapshot().await.unwrap();
        assert_eq!(fetched.btc_yield, dec!(0.09));
        assert_eq!(source.name(), "FixtureSource");
    }
}
