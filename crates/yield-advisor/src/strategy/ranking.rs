//! Strategy Ranking
//!
//! Orders evaluated strategies by a profile- and goal-weighted score.
//! Higher expected ROI is better, higher risk is worse; how much each
//! matters depends on the user's risk tolerance and financial goal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{FinancialGoal, RiskTolerance, StrategyEvaluation, UserProfile};

/// Weights applied to the ROI and risk components of the score
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreWeights {
    pub roi: Decimal,
    pub risk: Decimal,
}

fn base_weights(tolerance: RiskTolerance) -> ScoreWeights {
    match tolerance {
        RiskTolerance::Low => ScoreWeights {
            roi: dec!(0.3),
            risk: dec!(0.7),
        },
        RiskTolerance::Medium => ScoreWeights {
            roi: dec!(0.5),
            risk: dec!(0.5),
        },
        RiskTolerance::High => ScoreWeights {
            roi: dec!(0.7),
            risk: dec!(0.3),
        },
    }
}

/// Signed adjustments layered on top of the tolerance base weights
fn goal_adjustment(goal: FinancialGoal) -> ScoreWeights {
    match goal {
        FinancialGoal::CapitalPreservation => ScoreWeights {
            roi: dec!(-0.2),
            risk: dec!(0.2),
        },
        FinancialGoal::BalancedGrowth => ScoreWeights {
            roi: Decimal::ZERO,
            risk: Decimal::ZERO,
        },
        FinancialGoal::HighGrowth => ScoreWeights {
            roi: dec!(0.2),
            risk: dec!(-0.2),
        },
        FinancialGoal::IncomeGeneration => ScoreWeights {
            roi: dec!(0.1),
            risk: dec!(-0.1),
        },
    }
}

/// Combined weights for a profile, each component clamped to [0, 1].
pub fn adjusted_weights(profile: &UserProfile) -> ScoreWeights {
    let base = base_weights(profile.risk_tolerance);
    let adjustment = goal_adjustment(profile.financial_goal);

    ScoreWeights {
        roi: (base.roi + adjustment.roi).clamp(Decimal::ZERO, Decimal::ONE),
        risk: (base.risk + adjustment.risk).clamp(Decimal::ZERO, Decimal::ONE),
    }
}

/// Attach weighted scores and sort descending.
///
/// The sort is stable: ties keep their original generation order.
pub fn rank_strategies(
    mut evaluations: Vec<StrategyEvaluation>,
    profile: &UserProfile,
) -> Vec<StrategyEvaluation> {
    let weights = adjusted_weights(profile);
    tracing::debug!(
        tolerance = %profile.risk_tolerance,
        goal = %profile.financial_goal,
        "ranking strategies"
    );

    for evaluation in &mut evaluations {
        evaluation.weighted_score = Some(
            evaluation.expected_roi * weights.roi - evaluation.risk_score * weights.risk,
        );
    }

    evaluations.sort_by(|a, b| b.weighted_score.cmp(&a.weighted_score));
    evaluations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Strategy;

    fn evaluation(name: &str, roi: Decimal, risk: Decimal) -> StrategyEvaluation {
        StrategyEvaluation {
            strategy: Strategy {
                name: name.into(),
                description: String::new(),
                rationale: String::new(),
                actions: Vec::new(),
            },
            expected_roi: roi,
            risk_score: risk,
            confidence: dec!(45),
            weighted_score: None,
        }
    }

    #[test]
    fn test_weights_clamp_for_aggressive_profile() {
        let profile = UserProfile {
            risk_tolerance: RiskTolerance::High,
            financial_goal: FinancialGoal::HighGrowth,
            ..UserProfile::default()
        };
        let weights = adjusted_weights(&profile);
        assert_eq!(weights.roi, dec!(0.9));
        assert_eq!(weights.risk, dec!(0.1));
    }

    #[test]
    fn test_weights_clamp_for_defensive_profile() {
        let profile = UserProfile {
            risk_tolerance: RiskTolerance::Low,
            financial_goal: FinancialGoal::CapitalPreservation,
            ..UserProfile::default()
        };
        let weights = adjusted_weights(&profile);
        assert_eq!(weights.roi, dec!(0.1));
        assert_eq!(weights.risk, dec!(0.9));
    }

    #[test]
    fn test_aggressive_ranking_prefers_roi() {
        let profile = UserProfile {
            risk_tolerance: RiskTolerance::High,
            financial_goal: FinancialGoal::HighGrowth,
            ..UserProfile::default()
        };

        let ranked = rank_strategies(
            vec![
                evaluation("a", dec!(10), dec!(2)),
                evaluation("b", dec!(8), dec!(0)),
            ],
            &profile,
        );

        // 10 * 0.9 - 2 * 0.1 = 8.8 beats 8 * 0.9 = 7.2
        assert_eq!(ranked[0].strategy.name, "a");
        assert_eq!(ranked[0].weighted_score, Some(dec!(8.8)));
        assert_eq!(ranked[1].weighted_score, Some(dec!(7.2)));
    }

    #[test]
    fn test_ties_preserve_generation_order() {
        let ranked = rank_strategies(
            vec![
                evaluation("first", dec!(5), dec!(5)),
                evaluation("second", dec!(5), dec!(5)),
            ],
            &UserProfile::default(),
        );
        assert_eq!(ranked[0].strategy.name, "first");
        assert_eq!(ranked[1].strategy.name, "second");
    }
}
