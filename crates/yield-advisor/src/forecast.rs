//! Yield Forecasting
//!
//! Derives short/medium/long-horizon yield forecasts from the current
//! snapshot. The growth rates and confidence levels are fixed heuristics;
//! a trained forecaster can substitute its own `YieldForecast` through
//! `AdvisorEngine::load_yield_forecast`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::MarketSnapshot;

/// Expected BTC yield growth: +1% over 1m, +3% over 3m, +5% over 6m.
const BTC_GROWTH_1M: Decimal = dec!(1.01);
const BTC_GROWTH_3M: Decimal = dec!(1.03);
const BTC_GROWTH_6M: Decimal = dec!(1.05);
const BTC_VOLATILITY: Decimal = dec!(0.08);

/// Expected CORE yield growth: +1.5% over 1m, +4% over 3m, +6% over 6m.
const CORE_GROWTH_1M: Decimal = dec!(1.015);
const CORE_GROWTH_3M: Decimal = dec!(1.04);
const CORE_GROWTH_6M: Decimal = dec!(1.06);
const CORE_VOLATILITY: Decimal = dec!(0.12);

/// Forecast for one asset's yield over the standard horizons
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetForecast {
    /// Current annualized yield (fraction)
    pub current: Decimal,

    /// 1-month forecast
    #[serde(rename = "1m_forecast")]
    pub one_month: Decimal,

    /// 3-month forecast
    #[serde(rename = "3m_forecast")]
    pub three_month: Decimal,

    /// 6-month forecast
    #[serde(rename = "6m_forecast")]
    pub six_month: Decimal,

    /// Expected yield volatility (fraction)
    pub volatility: Decimal,
}

/// How much to trust the forecast at each horizon (fractions)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfidence {
    #[serde(rename = "1m")]
    pub one_month: Decimal,
    #[serde(rename = "3m")]
    pub three_month: Decimal,
    #[serde(rename = "6m")]
    pub six_month: Decimal,
}

impl Default for PredictionConfidence {
    fn default() -> Self {
        Self {
            one_month: dec!(0.90),
            three_month: dec!(0.75),
            six_month: dec!(0.60),
        }
    }
}

/// Yield forecasts for both assets plus shared prediction confidence.
///
/// Derived deterministically from a `MarketSnapshot`; recomputed whenever
/// the snapshot is replaced, never persisted beyond the engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldForecast {
    pub btc: AssetForecast,
    pub core: AssetForecast,
    #[serde(default)]
    pub confidence: PredictionConfidence,
}

impl YieldForecast {
    /// Derive the fixed-heuristic forecast from current yields.
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Self {
        Self {
            btc: AssetForecast {
                current: snapshot.btc_yield,
                one_month: snapshot.btc_yield * BTC_GROWTH_1M,
                three_month: snapshot.btc_yield * BTC_GROWTH_3M,
                six_month: snapshot.btc_yield * BTC_GROWTH_6M,
                volatility: BTC_VOLATILITY,
            },
            core: AssetForecast {
                current: snapshot.core_yield,
                one_month: snapshot.core_yield * CORE_GROWTH_1M,
                three_month: snapshot.core_yield * CORE_GROWTH_3M,
                six_month: snapshot.core_yield * CORE_GROWTH_6M,
                volatility: CORE_VOLATILITY,
            },
            confidence: PredictionConfidence::default(),
        }
    }

    /// Average of the two assets' volatilities
    pub fn average_volatility(&self) -> Decimal {
        (self.btc.volatility + self.core.volatility) / dec!(2)
    }
}
