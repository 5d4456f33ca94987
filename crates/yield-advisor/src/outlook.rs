//! Market Outlook Analysis
//!
//! Classifies yield trend direction per asset, picks an optimal timeframe
//! from forecast growth ratios, and aggregates volatility into an overall
//! confidence score.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::forecast::YieldForecast;

/// 6-month forecast more than 2% above current reads as increasing,
/// more than 2% below as decreasing.
const TREND_UP_THRESHOLD: Decimal = dec!(1.02);
const TREND_DOWN_THRESHOLD: Decimal = dec!(0.98);

/// Outlook confidence stays within [50%, 95%] regardless of volatility.
const CONFIDENCE_FLOOR: Decimal = dec!(0.5);
const CONFIDENCE_CEILING: Decimal = dec!(0.95);

/// Direction a yield is expected to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl std::fmt::Display for YieldTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// Which end of the curve currently grows faster
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    ShortTerm,
    LongTerm,
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ShortTerm => "short_term",
            Self::LongTerm => "long_term",
        };
        f.write_str(s)
    }
}

/// Aggregated view of where the yield markets are heading
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketOutlook {
    pub btc_yield_trend: YieldTrend,
    pub core_yield_trend: YieldTrend,
    pub optimal_timeframe: Timeframe,
    /// Overall confidence, percent
    pub confidence: Decimal,
}

impl MarketOutlook {
    /// Analyze a forecast into trend directions, optimal timeframe, and
    /// an overall confidence score.
    pub fn from_forecast(forecast: &YieldForecast) -> Self {
        let btc_yield_trend = classify_trend(forecast.btc.current, forecast.btc.six_month);
        let core_yield_trend = classify_trend(forecast.core.current, forecast.core.six_month);

        // Higher ratio means faster growth in that period
        let short_term_growth = (growth_ratio(forecast.btc.one_month, forecast.btc.current)
            + growth_ratio(forecast.core.one_month, forecast.core.current))
            / dec!(2);
        let long_term_growth = (growth_ratio(forecast.btc.three_month, forecast.btc.six_month)
            + growth_ratio(forecast.core.three_month, forecast.core.six_month))
            / dec!(2);

        let optimal_timeframe = if short_term_growth > long_term_growth {
            Timeframe::ShortTerm
        } else {
            Timeframe::LongTerm
        };

        // Higher volatility = lower confidence
        let confidence = ((Decimal::ONE - forecast.average_volatility())
            * forecast.confidence.three_month)
            .clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

        Self {
            btc_yield_trend,
            core_yield_trend,
            optimal_timeframe,
            confidence: (confidence * dec!(100)).round_dp(2),
        }
    }
}

/// Growth ratio with a neutral fallback for zero-yield snapshots
fn growth_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ONE
    } else {
        numerator / denominator
    }
}

fn classify_trend(current: Decimal, six_month: Decimal) -> YieldTrend {
    if six_month > current * TREND_UP_THRESHOLD {
        YieldTrend::Increasing
    } else if six_month < current * TREND_DOWN_THRESHOLD {
        YieldTrend::Decreasing
    } else {
        YieldTrend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::reference_snapshot;

    fn forecast() -> YieldForecast {
        YieldForecast::from_snapshot(&reference_snapshot())
    }

    #[test]
    fn test_both_trends_increasing_on_reference_data() {
        let outlook = MarketOutlook::from_forecast(&forecast());
        // 0.04725 / 0.045 = 1.05 > 1.02, 0.08268 / 0.078 = 1.06 > 1.02
        assert_eq!(outlook.btc_yield_trend, YieldTrend::Increasing);
        assert_eq!(outlook.core_yield_trend, YieldTrend::Increasing);
    }

    #[test]
    fn test_stable_and_decreasing_trends() {
        assert_eq!(classify_trend(dec!(0.05), dec!(0.0505)), YieldTrend::Stable);
        assert_eq!(
            classify_trend(dec!(0.05), dec!(0.045)),
            YieldTrend::Decreasing
        );
    }

    #[test]
    fn test_short_term_preferred_on_reference_data() {
        // avg(1m/current) = 1.0125 beats avg(3m/6m) ~= 0.981
        let outlook = MarketOutlook::from_forecast(&forecast());
        assert_eq!(outlook.optimal_timeframe, Timeframe::ShortTerm);
    }

    #[test]
    fn test_confidence_within_bounds() {
        // (1 - 0.10) * 0.75 = 0.675, inside the clamp, reported as percent
        let outlook = MarketOutlook::from_forecast(&forecast());
        assert_eq!(outlook.confidence, dec!(67.5));
    }

    #[test]
    fn test_confidence_clamped_at_floor() {
        let mut f = forecast();
        f.btc.volatility = dec!(0.6);
        f.core.volatility = dec!(0.6);
        // (1 - 0.6) * 0.75 = 0.30 clamps up to 0.50
        let outlook = MarketOutlook::from_forecast(&f);
        assert_eq!(outlook.confidence, dec!(50));
    }

    #[test]
    fn test_outlook_serializes_snake_case() {
        let outlook = MarketOutlook::from_forecast(&forecast());
        let json = serde_json::to_value(&outlook).unwrap();
        assert_eq!(json["btc_yield_trend"], "increasing");
        assert_eq!(json["optimal_timeframe"], "short_term");
    }
}
