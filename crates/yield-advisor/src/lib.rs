//! # yield-advisor
//!
//! Strategy recommendation engine for PT/YT yield tokenization markets.
//!
//! Splitting a yield-bearing position produces a principal token (PT,
//! redeemable at face value at maturity) and a yield token (YT, the yield
//! stream until maturity). This crate turns a market snapshot and a user
//! profile into a ranked set of allocation strategies across the two.
//!
//! ## Pipeline
//!
//! ```text
//! MarketSnapshot ──> YieldForecast ──> MarketOutlook
//!                                           │
//!                  UserProfile ──────┬──────┘
//!                                    ▼
//!                          generate_strategies
//!                                    ▼
//!                           estimate_returns        (per candidate)
//!                                    ▼
//!                           rank_strategies ──> Recommendation
//! ```
//!
//! Simulation and explanation run on demand against any individual
//! strategy. The whole pipeline is deterministic: the same inputs always
//! produce the same recommendation.
//!
//! ## Example
//!
//! ```
//! use yield_advisor::{AdvisorEngine, UserProfile, reference_snapshot};
//!
//! let mut engine = AdvisorEngine::new(UserProfile::default());
//! engine.load_market_data(reference_snapshot());
//!
//! let recommendation = engine.recommend_strategy().unwrap();
//! println!("{}", recommendation.recommended.strategy.name);
//! ```

pub mod engine;
pub mod error;
pub mod explain;
pub mod forecast;
pub mod model;
pub mod outlook;
pub mod simulation;
pub mod source;
pub mod strategy;

pub use engine::{AdvisorEngine, Recommendation};
pub use error::{AdvisorError, Result};
pub use explain::Explanation;
pub use forecast::{AssetForecast, PredictionConfidence, YieldForecast};
pub use model::{
    FinancialGoal, InvestmentHorizon, MarketSnapshot, Position, RiskTolerance, Strategy,
    StrategyAction, StrategyEvaluation, Token, TradeAction, UserProfile,
};
pub use outlook::{MarketOutlook, Timeframe, YieldTrend};
pub use simulation::{SimulationResult, TimeHorizon};
pub use source::{FixtureSource, MarketDataSource, reference_snapshot};
