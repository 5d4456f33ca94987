//! Strategy Catalog
//!
//! Four fixed strategy templates, mutated per call based on the market
//! outlook and the user's financial goal. Every call rebuilds the
//! templates from scratch so no state leaks between invocations.

use rust_decimal_macros::dec;

use crate::model::{FinancialGoal, Strategy, StrategyAction, TradeAction, UserProfile};
use crate::outlook::{MarketOutlook, YieldTrend};

use crate::model::Token::{PtBtc, PtCore, YtBtc, YtCore};
use crate::model::TradeAction::{Buy, Sell};

pub const YIELD_MAXIMIZER: &str = "Yield Maximizer";
pub const PRINCIPAL_PROTECTOR: &str = "Principal Protector";
pub const BALANCED_APPROACH: &str = "Balanced Approach";
pub const YIELD_SPECULATION: &str = "Yield Speculation";

/// The four base templates with their fixed action lists.
fn base_strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            name: YIELD_MAXIMIZER.into(),
            description: "Focus on yield tokens to maximize potential returns".into(),
            rationale: "Maximize yield exposure while maintaining some principal protection"
                .into(),
            actions: vec![
                StrategyAction::new(Sell, PtBtc, dec!(75)),
                StrategyAction::new(Buy, YtCore, dec!(75)),
            ],
        },
        Strategy {
            name: PRINCIPAL_PROTECTOR.into(),
            description: "Focus on principal tokens to secure guaranteed returns".into(),
            rationale: "Secure guaranteed returns while reducing yield volatility exposure"
                .into(),
            actions: vec![
                StrategyAction::new(Sell, YtBtc, dec!(50)),
                StrategyAction::new(Sell, YtCore, dec!(50)),
                StrategyAction::new(Buy, PtBtc, dec!(50)),
            ],
        },
        Strategy {
            name: BALANCED_APPROACH.into(),
            description: "Maintain both PT and YT exposure with slight adjustments".into(),
            rationale: "Balance yield potential with principal protection".into(),
            actions: vec![
                StrategyAction::new(Sell, YtBtc, dec!(25)),
                StrategyAction::new(Buy, YtCore, dec!(25)),
            ],
        },
        Strategy {
            name: YIELD_SPECULATION.into(),
            description: "Heavy focus on YT tokens for maximum yield potential".into(),
            rationale: "Aggressive strategy betting on increasing yield rates".into(),
            actions: vec![
                StrategyAction::new(Sell, PtBtc, dec!(90)),
                StrategyAction::new(Sell, PtCore, dec!(90)),
                StrategyAction::new(Buy, YtBtc, dec!(45)),
                StrategyAction::new(Buy, YtCore, dec!(45)),
            ],
        },
    ]
}

/// Generate candidate strategies for the current outlook and profile.
///
/// Mutations apply in a fixed order, each independent of the others:
/// trend-driven action replacement first, then goal-driven filtering.
pub fn generate_strategies(outlook: &MarketOutlook, profile: &UserProfile) -> Vec<Strategy> {
    let mut strategies = base_strategies();

    for strategy in &mut strategies {
        if strategy.name == YIELD_MAXIMIZER
            && outlook.core_yield_trend == YieldTrend::Increasing
        {
            // Rising CORE yield: shift the maximizer toward CORE YT exposure
            strategy.actions = vec![
                StrategyAction::new(Sell, PtBtc, dec!(70)),
                StrategyAction::new(Sell, PtCore, dec!(30)),
                StrategyAction::new(Buy, YtCore, dec!(80)),
            ];
        } else if strategy.name == PRINCIPAL_PROTECTOR
            && outlook.btc_yield_trend == YieldTrend::Decreasing
        {
            // Falling BTC yield: rotate out of YT and into BTC principal
            strategy.actions = vec![
                StrategyAction::new(Sell, YtBtc, dec!(80)),
                StrategyAction::new(Sell, YtCore, dec!(40)),
                StrategyAction::new(Buy, PtBtc, dec!(70)),
            ];
        }
    }

    match profile.financial_goal {
        FinancialGoal::CapitalPreservation => {
            for strategy in &mut strategies {
                if strategy.name == YIELD_MAXIMIZER {
                    // Keep sells only on YT tokens; all buys stay
                    strategy
                        .actions
                        .retain(|a| a.action != TradeAction::Sell || a.token.is_yield());
                    strategy
                        .description
                        .push_str(", with focus on capital preservation");
                }
            }
        }
        FinancialGoal::HighGrowth => {
            for strategy in &mut strategies {
                if strategy.name == PRINCIPAL_PROTECTOR {
                    // Drop buys of principal tokens
                    strategy
                        .actions
                        .retain(|a| a.action != TradeAction::Buy || !a.token.is_principal());
                    strategy
                        .description
                        .push_str(", while seeking growth opportunities");
                }
            }
        }
        FinancialGoal::BalancedGrowth | FinancialGoal::IncomeGeneration => {}
    }

    strategies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outlook::Timeframe;

    fn neutral_outlook() -> MarketOutlook {
        MarketOutlook {
            btc_yield_trend: YieldTrend::Stable,
            core_yield_trend: YieldTrend::Stable,
            optimal_timeframe: Timeframe::LongTerm,
            confidence: dec!(70),
        }
    }

    #[test]
    fn test_base_templates() {
        let strategies = generate_strategies(&neutral_outlook(), &UserProfile::default());
        assert_eq!(strategies.len(), 4);

        let maximizer = &strategies[0];
        assert_eq!(maximizer.name, YIELD_MAXIMIZER);
        assert_eq!(maximizer.actions.len(), 2);
        assert_eq!(maximizer.actions[0].percentage, dec!(75));

        let speculation = &strategies[3];
        assert_eq!(speculation.actions.len(), 4);
    }

    #[test]
    fn test_core_increasing_rewrites_maximizer() {
        let mut outlook = neutral_outlook();
        outlook.core_yield_trend = YieldTrend::Increasing;

        let strategies = generate_strategies(&outlook, &UserProfile::default());
        let maximizer = &strategies[0];
        assert_eq!(
            maximizer.actions,
            vec![
                StrategyAction::new(Sell, PtBtc, dec!(70)),
                StrategyAction::new(Sell, PtCore, dec!(30)),
                StrategyAction::new(Buy, YtCore, dec!(80)),
            ]
        );
    }

    #[test]
    fn test_btc_decreasing_rewrites_protector() {
        let mut outlook = neutral_outlook();
        outlook.btc_yield_trend = YieldTrend::Decreasing;

        let strategies = generate_strategies(&outlook, &UserProfile::default());
        let protector = &strategies[1];
        assert_eq!(
            protector.actions,
            vec![
                StrategyAction::new(Sell, YtBtc, dec!(80)),
                StrategyAction::new(Sell, YtCore, dec!(40)),
                StrategyAction::new(Buy, PtBtc, dec!(70)),
            ]
        );
    }

    #[test]
    fn test_capital_preservation_drops_non_yt_sells() {
        let profile = UserProfile {
            financial_goal: FinancialGoal::CapitalPreservation,
            ..UserProfile::default()
        };

        let strategies = generate_strategies(&neutral_outlook(), &profile);
        let maximizer = &strategies[0];
        // The base sell of PT-BTC goes away, the YT-CORE buy stays
        assert_eq!(
            maximizer.actions,
            vec![StrategyAction::new(Buy, YtCore, dec!(75))]
        );
        assert!(
            maximizer
                .description
                .ends_with(", with focus on capital preservation")
        );
    }

    #[test]
    fn test_high_growth_drops_pt_buys() {
        let profile = UserProfile {
            financial_goal: FinancialGoal::HighGrowth,
            ..UserProfile::default()
        };

        let strategies = generate_strategies(&neutral_outlook(), &profile);
        let protector = &strategies[1];
        assert_eq!(
            protector.actions,
            vec![
                StrategyAction::new(Sell, YtBtc, dec!(50)),
                StrategyAction::new(Sell, YtCore, dec!(50)),
            ]
        );
        assert!(
            protector
                .description
                .ends_with(", while seeking growth opportunities")
        );
    }

    #[test]
    fn test_templates_are_independent_per_call() {
        let first = generate_strategies(&neutral_outlook(), &UserProfile::default());
        let second = generate_strategies(&neutral_outlook(), &UserProfile::default());
        assert_eq!(first, second);
    }
}
