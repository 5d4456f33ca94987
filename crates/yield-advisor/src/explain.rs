//! Recommendation Explanation
//!
//! Renders a selected strategy into a narrative report. Computation and
//! presentation are split: `Explanation` is the structured intermediate
//! record, `render` turns it into text, so the narrative template can be
//! swapped without touching the figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{FinancialGoal, RiskTolerance, Strategy, UserProfile};
use crate::outlook::{MarketOutlook, Timeframe, YieldTrend};
use crate::strategy::estimator::ReturnsEstimate;

/// Structured explanation of a strategy recommendation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub strategy: Strategy,
    pub expected_roi: Decimal,
    pub risk_score: Decimal,
    pub confidence: Decimal,
    pub btc_yield_trend: YieldTrend,
    pub core_yield_trend: YieldTrend,
    pub optimal_timeframe: Timeframe,
    pub risk_tolerance: RiskTolerance,
    pub financial_goal: FinancialGoal,
    pub horizon_phrase: String,
}

impl Explanation {
    pub fn new(
        strategy: Strategy,
        estimate: &ReturnsEstimate,
        outlook: &MarketOutlook,
        profile: &UserProfile,
    ) -> Self {
        Self {
            strategy,
            expected_roi: estimate.expected_roi,
            risk_score: estimate.risk_score,
            confidence: estimate.confidence,
            btc_yield_trend: outlook.btc_yield_trend,
            core_yield_trend: outlook.core_yield_trend,
            optimal_timeframe: outlook.optimal_timeframe,
            risk_tolerance: profile.risk_tolerance,
            financial_goal: profile.financial_goal,
            horizon_phrase: profile.investment_horizon.phrase().into(),
        }
    }

    /// Render the narrative report.
    pub fn render(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!("Strategy: {}\n\n", self.strategy.name));
        report.push_str(&format!("Description: {}\n\n", self.strategy.description));
        report.push_str(&format!("Rationale: {}\n\n", self.strategy.rationale));
        report.push_str(&format!(
            "Expected ROI: {}% (with {}% confidence)\n\n",
            self.expected_roi, self.confidence
        ));
        report.push_str(&format!("Risk assessment: {}/10\n\n", self.risk_score));
        report.push_str(&format!(
            "Current market conditions: Based on our analysis, BTC yields are expected to \
             be {} while CORE yields are expected to be {}.\n\n",
            self.btc_yield_trend, self.core_yield_trend
        ));
        report.push_str(&format!("Optimal timeframe: {}\n\n", self.optimal_timeframe));
        report.push_str(&format!(
            "This strategy aligns with your {} risk tolerance and {} financial goals. \
             It aims to optimize your returns over the {} by focusing on the most \
             promising yield opportunities.\n\n",
            self.risk_tolerance, self.financial_goal, self.horizon_phrase
        ));
        report.push_str("Recommended actions:\n");
        for action in &self.strategy.actions {
            report.push_str(&format!(
                "- {} {}% of your {} tokens\n",
                capitalize(&action.action.to_string()),
                action.percentage,
                action.token
            ));
        }

        report
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
