//! Return Estimation
//!
//! Computes expected ROI, risk score, and confidence for one strategy
//! given market data, the user's horizon, and risk tolerance. The static
//! per-token tables live here, next to the only code that reads them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::forecast::YieldForecast;
use crate::model::{
    MarketSnapshot, RiskTolerance, Strategy, Token, TradeAction, UserProfile,
};

/// Risk score exceeds reward sensitivity for yield-side tokens.
fn risk_weight(token: Token) -> Decimal {
    match token {
        Token::PtBtc => dec!(0.2),
        Token::PtCore => dec!(0.3),
        Token::YtBtc => dec!(0.7),
        Token::YtCore => dec!(0.8),
        // Neutral weight keeps ranking total-order defined for any token mix
        Token::Unknown => dec!(0.5),
    }
}

/// Annualized ROI expectation per token: PT tokens earn their discount to
/// face value, YT tokens earn the yield rate.
fn roi_expectation(token: Token, snapshot: &MarketSnapshot) -> Decimal {
    match token {
        Token::PtBtc => (Decimal::ONE - snapshot.pt_btc_price) * dec!(100),
        Token::PtCore => (Decimal::ONE - snapshot.pt_core_price) * dec!(100),
        Token::YtBtc => snapshot.btc_yield * dec!(100),
        Token::YtCore => snapshot.core_yield * dec!(100),
        Token::Unknown => Decimal::ZERO,
    }
}

/// Sells realize only half the forgone expectation.
fn impact_factor(action: TradeAction) -> Decimal {
    match action {
        TradeAction::Buy => Decimal::ONE,
        TradeAction::Sell => dec!(-0.5),
    }
}

fn risk_tolerance_factor(tolerance: RiskTolerance) -> Decimal {
    match tolerance {
        RiskTolerance::Low => dec!(0.8),
        RiskTolerance::Medium => dec!(1.0),
        RiskTolerance::High => dec!(1.2),
    }
}

/// Estimated figures for one strategy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnsEstimate {
    /// Expected return over the user's investment horizon, percent
    pub expected_roi: Decimal,

    /// Risk score, 0-10 scale
    pub risk_score: Decimal,

    /// Confidence in the estimate, percent
    pub confidence: Decimal,
}

/// Estimate expected ROI, risk, and confidence for a strategy.
///
/// Deterministic: the same strategy, snapshot, forecast, and profile
/// always produce the same figures.
pub fn estimate_returns(
    strategy: &Strategy,
    snapshot: &MarketSnapshot,
    forecast: &YieldForecast,
    profile: &UserProfile,
) -> ReturnsEstimate {
    tracing::debug!(strategy = %strategy.name, "estimating returns");

    let horizon_factor =
        Decimal::from(profile.investment_horizon.months()) / dec!(12);

    let mut expected_roi = Decimal::ZERO;
    let mut risk_score = Decimal::ZERO;

    for action in &strategy.actions {
        let fraction = action.percentage / dec!(100);
        let impact = impact_factor(action.action);

        expected_roi +=
            roi_expectation(action.token, snapshot) * fraction * impact * horizon_factor;
        risk_score += risk_weight(action.token) * fraction * impact.abs();
    }

    expected_roi *= risk_tolerance_factor(profile.risk_tolerance);

    // More actions = more complex = less confident, capped at 5 actions
    let complexity =
        (Decimal::from(strategy.actions.len()) / dec!(5)).min(Decimal::ONE);
    let confidence = (Decimal::ONE - complexity) * forecast.confidence.three_month * dec!(100);

    ReturnsEstimate {
        expected_roi: expected_roi.round_dp(2),
        risk_score: (risk_score * dec!(10)).round_dp(2),
        confidence: confidence.round_dp(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InvestmentHorizon, StrategyAction};
    use crate::source::reference_snapshot;

    fn fixtures() -> (MarketSnapshot, YieldForecast) {
        let snapshot = reference_snapshot();
        let forecast = YieldForecast::from_snapshot(&snapshot);
        (snapshot, forecast)
    }

    fn maximizer() -> Strategy {
        Strategy {
            name: "Yield Maximizer".into(),
            description: String::new(),
            rationale: String::new(),
            actions: vec![
                StrategyAction::new(TradeAction::Sell, Token::PtBtc, dec!(75)),
                StrategyAction::new(TradeAction::Buy, Token::YtCore, dec!(75)),
            ],
        }
    }

    #[test]
    fn test_maximizer_estimate_on_reference_data() {
        let (snapshot, forecast) = fixtures();
        let estimate = estimate_returns(
            &maximizer(),
            &snapshot,
            &forecast,
            &UserProfile::default(),
        );

        // sell PT-BTC 75%: 3.5 * 0.75 * -0.5 = -1.3125
        // buy YT-CORE 75%: 7.8 * 0.75 * 1.0 = 5.85
        assert_eq!(estimate.expected_roi, dec!(4.54));
        // (0.2 * 0.75 * 0.5 + 0.8 * 0.75 * 1.0) * 10 = 6.75
        assert_eq!(estimate.risk_score, dec!(6.75));
        // (1 - 2/5) * 0.75 * 100 = 45
        assert_eq!(estimate.confidence, dec!(45));
    }

    #[test]
    fn test_horizon_scales_roi() {
        let (snapshot, forecast) = fixtures();
        let profile = UserProfile {
            investment_horizon: InvestmentHorizon::Long,
            ..UserProfile::default()
        };
        let estimate = estimate_returns(&maximizer(), &snapshot, &forecast, &profile);

        // 36 months: 4.5375 * 3 = 13.6125 -> 13.61
        assert_eq!(estimate.expected_roi, dec!(13.61));
        // Risk is horizon-independent
        assert_eq!(estimate.risk_score, dec!(6.75));
    }

    #[test]
    fn test_risk_tolerance_scales_roi() {
        let (snapshot, forecast) = fixtures();
        let profile = UserProfile {
            risk_tolerance: RiskTolerance::High,
            ..UserProfile::default()
        };
        let estimate = estimate_returns(&maximizer(), &snapshot, &forecast, &profile);

        // 4.5375 * 1.2 = 5.445 -> 5.44 (banker's rounding at the midpoint)
        assert_eq!(estimate.expected_roi, dec!(5.44));
    }

    #[test]
    fn test_estimation_is_idempotent() {
        let (snapshot, forecast) = fixtures();
        let strategy = maximizer();
        let profile = UserProfile::default();

        let first = estimate_returns(&strategy, &snapshot, &forecast, &profile);
        let second = estimate_returns(&strategy, &snapshot, &forecast, &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_token_is_neutral() {
        let (snapshot, forecast) = fixtures();
        let strategy = Strategy {
            name: "Exotic".into(),
            description: String::new(),
            rationale: String::new(),
            actions: vec![StrategyAction::new(
                TradeAction::Buy,
                Token::Unknown,
                dec!(100),
            )],
        };
        let estimate =
            estimate_returns(&strategy, &snapshot, &forecast, &UserProfile::default());

        assert_eq!(estimate.expected_roi, Decimal::ZERO);
        // 0.5 * 1.0 * 10 = 5
        assert_eq!(estimate.risk_score, dec!(5));
    }

    #[test]
    fn test_confidence_floors_at_five_actions() {
        let (snapshot, forecast) = fixtures();
        let action = StrategyAction::new(TradeAction::Buy, Token::YtBtc, dec!(10));
        let strategy = Strategy {
            name: "Busy".into(),
            description: String::new(),
            rationale: String::new(),
            actions: vec![action; 6],
        };
        let estimate =
            estimate_returns(&strategy, &snapshot, &forecast, &UserProfile::default());
        assert_eq!(estimate.confidence, Decimal::ZERO);
    }
}
