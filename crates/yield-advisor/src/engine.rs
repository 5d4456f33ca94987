//! Advisor Engine
//!
//! Owns the cached market snapshot, derived forecast, user profile, and
//! registered positions, and exposes the recommendation operations on top
//! of them. One instance per logical session; the engine itself is
//! synchronous and does no locking, so concurrent callers must serialize
//! mutation externally.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::explain::Explanation;
use crate::forecast::YieldForecast;
use crate::model::{
    MarketSnapshot, Position, Strategy, StrategyEvaluation, UserProfile,
};
use crate::outlook::MarketOutlook;
use crate::simulation::{SimulationResult, TimeHorizon, simulate};
use crate::strategy::{estimate_returns, generate_strategies, rank_strategies};
use crate::strategy::estimator::ReturnsEstimate;

/// A ranked recommendation: the winner, the next two alternatives, and
/// the market outlook that shaped them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended: StrategyEvaluation,
    pub alternatives: Vec<StrategyEvaluation>,
    pub market_outlook: MarketOutlook,
}

/// The strategy recommendation engine.
///
/// All state is held on the instance - no process-wide singletons. The
/// snapshot and forecast are replaced wholesale, never partially mutated.
pub struct AdvisorEngine {
    profile: UserProfile,
    snapshot: Option<MarketSnapshot>,
    forecast: Option<YieldForecast>,
    positions: Vec<Position>,
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}

impl AdvisorEngine {
    pub fn new(profile: UserProfile) -> Self {
        tracing::info!("advisor engine initialized");
        Self {
            profile,
            snapshot: None,
            forecast: None,
            positions: Vec::new(),
        }
    }

    /// Load current market data and recompute the yield forecast from it.
    pub fn load_market_data(&mut self, snapshot: MarketSnapshot) {
        tracing::info!(as_of = %snapshot.as_of, "loading market data");
        self.forecast = Some(YieldForecast::from_snapshot(&snapshot));
        self.snapshot = Some(snapshot);
    }

    /// Substitute an externally produced forecast (e.g. from a trained
    /// model) for the built-in heuristic one.
    pub fn load_yield_forecast(&mut self, forecast: YieldForecast) {
        tracing::info!("loading external yield forecast");
        self.forecast = Some(forecast);
    }

    /// Replace the user's risk profile and preferences.
    pub fn set_user_profile(&mut self, profile: UserProfile) {
        tracing::info!(?profile, "setting user profile");
        self.profile = profile;
    }

    /// Replace the registered positions used as the simulation baseline.
    pub fn register_positions(&mut self, positions: Vec<Position>) {
        tracing::info!(count = positions.len(), "registering positions");
        self.positions = positions;
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn market_data_loaded(&self) -> bool {
        self.snapshot.is_some() && self.forecast.is_some()
    }

    fn require_loaded(&self) -> Result<(&MarketSnapshot, &YieldForecast)> {
        match (self.snapshot.as_ref(), self.forecast.as_ref()) {
            (Some(snapshot), Some(forecast)) => Ok((snapshot, forecast)),
            _ => {
                tracing::warn!("operation requested before market data was loaded");
                Err(AdvisorError::MarketDataNotLoaded)
            }
        }
    }

    fn require_forecast(&self) -> Result<&YieldForecast> {
        self.forecast.as_ref().ok_or_else(|| {
            tracing::warn!("outlook requested before any forecast was available");
            AdvisorError::ForecastUnavailable
        })
    }

    /// Current market outlook derived from the cached forecast.
    pub fn market_outlook(&self) -> Result<MarketOutlook> {
        let forecast = self.require_forecast()?;
        Ok(MarketOutlook::from_forecast(forecast))
    }

    /// Evaluate a single strategy against the cached market state.
    pub fn evaluate_strategy(&self, strategy: &Strategy) -> Result<StrategyEvaluation> {
        let (snapshot, forecast) = self.require_loaded()?;
        let estimate = estimate_returns(strategy, snapshot, forecast, &self.profile);
        Ok(evaluation_from(strategy.clone(), estimate))
    }

    /// Generate, evaluate, and rank candidate strategies; return the top
    /// pick with up to two alternatives and the outlook behind them.
    pub fn recommend_strategy(&self) -> Result<Recommendation> {
        let (snapshot, forecast) = self.require_loaded()?;
        tracing::info!("generating strategy recommendations");

        let market_outlook = MarketOutlook::from_forecast(forecast);
        let candidates = generate_strategies(&market_outlook, &self.profile);

        let evaluations = candidates
            .into_iter()
            .map(|strategy| {
                let estimate =
                    estimate_returns(&strategy, snapshot, forecast, &self.profile);
                evaluation_from(strategy, estimate)
            })
            .collect();

        let mut ranked = rank_strategies(evaluations, &self.profile);

        // Catalog always yields candidates, so ranked is never empty
        let recommended = ranked.remove(0);
        ranked.truncate(2);

        Ok(Recommendation {
            recommended,
            alternatives: ranked,
            market_outlook,
        })
    }

    /// Project a strategy over a time horizon against the registered
    /// positions. Figures are recomputed from the cached market state.
    pub fn simulate_strategy(
        &self,
        strategy: &Strategy,
        horizon: TimeHorizon,
    ) -> Result<SimulationResult> {
        self.simulate_with(strategy, None, horizon)
    }

    /// Like `simulate_strategy` but reusing previously evaluated figures.
    pub fn simulate_evaluation(
        &self,
        evaluation: &StrategyEvaluation,
        horizon: TimeHorizon,
    ) -> Result<SimulationResult> {
        let stored = ReturnsEstimate {
            expected_roi: evaluation.expected_roi,
            risk_score: evaluation.risk_score,
            confidence: evaluation.confidence,
        };
        self.simulate_with(&evaluation.strategy, Some(stored), horizon)
    }

    fn simulate_with(
        &self,
        strategy: &Strategy,
        stored: Option<ReturnsEstimate>,
        horizon: TimeHorizon,
    ) -> Result<SimulationResult> {
        let (snapshot, forecast) = self.require_loaded()?;
        Ok(simulate(
            strategy,
            stored,
            horizon,
            &self.positions,
            snapshot,
            forecast,
            &self.profile,
        ))
    }

    /// Structured explanation for a named strategy from the current
    /// candidate set.
    pub fn explanation(&self, strategy_name: &str) -> Result<Explanation> {
        let (snapshot, forecast) = self.require_loaded()?;

        let outlook = MarketOutlook::from_forecast(forecast);
        let strategy = generate_strategies(&outlook, &self.profile)
            .into_iter()
            .find(|s| s.name == strategy_name)
            .ok_or_else(|| {
                tracing::warn!(strategy = strategy_name, "explanation for unknown strategy");
                AdvisorError::StrategyNotFound(strategy_name.to_string())
            })?;

        let estimate = estimate_returns(&strategy, snapshot, forecast, &self.profile);
        Ok(Explanation::new(strategy, &estimate, &outlook, &self.profile))
    }

    /// Narrative explanation for a named strategy. Unknown names yield the
    /// "Strategy not found" sentinel rather than an error.
    pub fn explain_recommendation(&self, strategy_name: &str) -> String {
        match self.explanation(strategy_name) {
            Ok(explanation) => explanation.render(),
            Err(AdvisorError::StrategyNotFound(_)) => "Strategy not found".into(),
            Err(error) => error.to_string(),
        }
    }
}

fn evaluation_from(strategy: Strategy, estimate: ReturnsEstimate) -> StrategyEvaluation {
    StrategyEvaluation {
        strategy,
        expected_roi: estimate.expected_roi,
        risk_score: estimate.risk_score,
        confidence: estimate.confidence,
        weighted_score: None,
    }
}
