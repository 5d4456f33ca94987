//! Domain Models
//!
//! Core data types for PT/YT yield tokenization advice.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of current market data for the tokenized yield markets.
///
/// Immutable once loaded into the engine - replaced wholesale on update,
/// never partially mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Annualized BTC staking yield (fraction, e.g. 0.045 = 4.5%)
    pub btc_yield: Decimal,

    /// Annualized CORE staking yield (fraction)
    pub core_yield: Decimal,

    /// PT-BTC price as discount to face value, in (0, 1]
    pub pt_btc_price: Decimal,

    /// PT-CORE price as discount to face value, in (0, 1]
    pub pt_core_price: Decimal,

    /// YT-BTC price
    pub yt_btc_price: Decimal,

    /// YT-CORE price
    pub yt_core_price: Decimal,

    /// Maturity dates currently tradeable
    #[serde(default)]
    pub available_maturities: Vec<NaiveDate>,

    /// When this snapshot was taken
    #[serde(default = "Utc::now")]
    pub as_of: DateTime<Utc>,
}

/// User-declared willingness to accept volatility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Investment time window used to scale annualized figures
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentHorizon {
    Short,
    #[default]
    Medium,
    Long,
}

impl InvestmentHorizon {
    /// Horizon length in months
    pub fn months(self) -> u32 {
        match self {
            Self::Short => 3,
            Self::Medium => 12,
            Self::Long => 36,
        }
    }

    /// Human-readable phrasing for narratives
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Short => "next few months",
            Self::Medium => "coming year",
            Self::Long => "next several years",
        }
    }
}

/// User-declared optimization target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialGoal {
    CapitalPreservation,
    #[default]
    BalancedGrowth,
    HighGrowth,
    IncomeGeneration,
}

impl std::fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CapitalPreservation => "capital_preservation",
            Self::BalancedGrowth => "balanced_growth",
            Self::HighGrowth => "high_growth",
            Self::IncomeGeneration => "income_generation",
        };
        f.write_str(s)
    }
}

/// A user's risk profile and preferences.
///
/// Fully replaceable at any time; affects all subsequent strategy
/// generation, ranking, and simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,

    #[serde(default)]
    pub investment_horizon: InvestmentHorizon,

    #[serde(default)]
    pub financial_goal: FinancialGoal,
}

/// A tokenized claim traded on the market
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    #[serde(rename = "PT-BTC")]
    PtBtc,
    #[serde(rename = "PT-CORE")]
    PtCore,
    #[serde(rename = "YT-BTC")]
    YtBtc,
    #[serde(rename = "YT-CORE")]
    YtCore,
    /// Tokens the engine has no tables for. These contribute a neutral
    /// risk weight and zero ROI so ranking stays well-defined.
    #[serde(other)]
    Unknown,
}

impl Token {
    /// Principal-side token (PT-*)
    pub fn is_principal(self) -> bool {
        matches!(self, Self::PtBtc | Self::PtCore)
    }

    /// Yield-side token (YT-*)
    pub fn is_yield(self) -> bool {
        matches!(self, Self::YtBtc | Self::YtCore)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PtBtc => "PT-BTC",
            Self::PtCore => "PT-CORE",
            Self::YtBtc => "YT-BTC",
            Self::YtCore => "YT-CORE",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Buy or sell side of a strategy action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        };
        f.write_str(s)
    }
}

/// One step of a strategy: trade a percentage of a token position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyAction {
    pub action: TradeAction,
    pub token: Token,
    /// Portion of the holding to trade, 0-100
    pub percentage: Decimal,
}

impl StrategyAction {
    pub fn new(action: TradeAction, token: Token, percentage: Decimal) -> Self {
        Self {
            action,
            token,
            percentage,
        }
    }
}

/// A named allocation strategy with its ordered action list.
///
/// Instances are rebuilt per generation call so outlook- and goal-driven
/// mutation never corrupts the templates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    pub description: String,
    pub rationale: String,
    pub actions: Vec<StrategyAction>,
}

/// A strategy together with its estimated figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyEvaluation {
    #[serde(flatten)]
    pub strategy: Strategy,

    /// Expected return over the user's horizon, percent
    pub expected_roi: Decimal,

    /// Risk score on a 0-10 scale
    pub risk_score: Decimal,

    /// Confidence in the estimate, percent
    pub confidence: Decimal,

    /// Ranking metric, only present after ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_score: Option<Decimal>,
}

/// A currently held position, used as the value baseline for simulation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub token: Token,
    pub value_usd: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_token_wire_names() {
        let json = serde_json::to_string(&Token::PtBtc).unwrap();
        assert_eq!(json, "\"PT-BTC\"");

        let token: Token = serde_json::from_str("\"YT-CORE\"").unwrap();
        assert_eq!(token, Token::YtCore);
    }

    #[test]
    fn test_unknown_token_deserializes() {
        let token: Token = serde_json::from_str("\"PT-DOGE\"").unwrap();
        assert_eq!(token, Token::Unknown);
        assert!(!token.is_principal());
        assert!(!token.is_yield());
    }

    #[test]
    fn test_profile_defaults() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.risk_tolerance, RiskTolerance::Medium);
        assert_eq!(profile.investment_horizon, InvestmentHorizon::Medium);
        assert_eq!(profile.financial_goal, FinancialGoal::BalancedGrowth);
    }

    #[test]
    fn test_profile_wire_names() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"risk_tolerance":"high","investment_horizon":"long","financial_goal":"capital_preservation"}"#,
        )
        .unwrap();
        assert_eq!(profile.risk_tolerance, RiskTolerance::High);
        assert_eq!(profile.investment_horizon.months(), 36);
        assert_eq!(profile.financial_goal, FinancialGoal::CapitalPreservation);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let json = r#"{
            "btc_yield": "0.045",
            "core_yield": "0.078",
            "pt_btc_price": "0.965",
            "pt_core_price": "0.942",
            "yt_btc_price": "0.035",
            "yt_core_price": "0.062"
        }"#;
        let snapshot: MarketSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.btc_yield, dec!(0.045));
        assert!(snapshot.available_maturities.is_empty());
    }
}
