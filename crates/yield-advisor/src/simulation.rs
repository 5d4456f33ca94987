//! Strategy Simulation
//!
//! Projects a strategy's expected value and confidence interval over a
//! chosen time horizon against a position baseline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::forecast::YieldForecast;
use crate::model::{MarketSnapshot, Position, RiskTolerance, Strategy, UserProfile};
use crate::strategy::estimator::{ReturnsEstimate, estimate_returns};
use crate::strategy::catalog::{
    BALANCED_APPROACH, PRINCIPAL_PROTECTOR, YIELD_MAXIMIZER, YIELD_SPECULATION,
};

/// Baseline portfolio value when no positions are registered
const DEFAULT_INITIAL_VALUE: Decimal = dec!(10000);

/// Simulation time horizon
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "1m")]
    OneMonth,
    #[default]
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeHorizon {
    pub fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    /// Lenient parse for caller-supplied strings; unrecognized input
    /// falls back to the 3-month default.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "1m" => Self::OneMonth,
            "6m" => Self::SixMonths,
            "1y" => Self::OneYear,
            _ => Self::ThreeMonths,
        }
    }
}

/// Outcome of projecting a strategy forward
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub initial_value: Decimal,
    pub expected_value: Decimal,
    /// Horizon-scaled expected return, percent
    pub expected_roi: Decimal,
    /// Qualitative label from the strategy/tolerance matrix
    pub risk_assessment: String,
    /// [low, high] band around the expected value
    pub confidence_interval: [Decimal; 2],
}

/// Project a strategy over `horizon` against the registered positions.
///
/// When `stored` figures from a prior evaluation are supplied they are
/// reused; otherwise the estimate is recomputed.
pub fn simulate(
    strategy: &Strategy,
    stored: Option<ReturnsEstimate>,
    horizon: TimeHorizon,
    positions: &[Position],
    snapshot: &MarketSnapshot,
    forecast: &YieldForecast,
    profile: &UserProfile,
) -> SimulationResult {
    tracing::debug!(strategy = %strategy.name, months = horizon.months(), "simulating strategy");

    let horizon_months = Decimal::from(horizon.months());

    let initial_value = if positions.is_empty() {
        DEFAULT_INITIAL_VALUE
    } else {
        positions.iter().map(|p| p.value_usd).sum()
    };

    let estimate =
        stored.unwrap_or_else(|| estimate_returns(strategy, snapshot, forecast, profile));

    // Estimates are annualized; scale down to the simulation horizon
    let horizon_roi = estimate.expected_roi * horizon_months / dec!(12);
    let expected_value = initial_value * (Decimal::ONE + horizon_roi / dec!(100));

    // Wider interval for higher risk or longer horizons
    let interval_width = forecast.average_volatility()
        * estimate.risk_score
        * (horizon_months / dec!(3))
        * dec!(0.01)
        * initial_value;

    SimulationResult {
        initial_value: initial_value.round_dp(2),
        expected_value: expected_value.round_dp(2),
        expected_roi: horizon_roi.round_dp(2),
        risk_assessment: risk_assessment(&strategy.name, profile.risk_tolerance).into(),
        confidence_interval: [
            (expected_value - interval_width).round_dp(2),
            (expected_value + interval_width).round_dp(2),
        ],
    }
}

/// Qualitative risk label for a (strategy, tolerance) pair.
///
/// Unmapped combinations read as "medium".
fn risk_assessment(strategy_name: &str, tolerance: RiskTolerance) -> &'static str {
    use RiskTolerance::{High, Low, Medium};

    match (strategy_name, tolerance) {
        (YIELD_SPECULATION, Low) => "high",
        (YIELD_SPECULATION, Medium) => "medium-high",
        (YIELD_SPECULATION, High) => "medium",
        (YIELD_MAXIMIZER, Low) => "medium-high",
        (YIELD_MAXIMIZER, Medium) => "medium",
        (YIELD_MAXIMIZER, High) => "medium-low",
        (BALANCED_APPROACH, Low) => "medium",
        (BALANCED_APPROACH, Medium) => "medium-low",
        (BALANCED_APPROACH, High) => "low",
        (PRINCIPAL_PROTECTOR, Low | Medium) => "low",
        (PRINCIPAL_PROTECTOR, High) => "very low",
        _ => "medium",
    }
}
