//! HTTP Handlers
//!
//! Thin dispatch layer over `AdvisorEngine`: deserialize, lock, call,
//! serialize. All decision logic lives in the engine.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use yield_advisor::{
    AdvisorError, MarketSnapshot, Position, Recommendation, SimulationResult, Strategy,
    TimeHorizon, UserProfile,
};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub market_data_loaded: bool,
    pub source: String,
}

#[derive(Serialize)]
pub struct LoadedResponse {
    pub loaded: bool,
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub strategy: Strategy,
    #[serde(default)]
    pub time_horizon: Option<String>,
}

#[derive(Serialize)]
pub struct ExplainResponse {
    pub strategy: String,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(error: &AdvisorError) -> ApiError {
    let (status, code) = match error {
        AdvisorError::MarketDataNotLoaded => (StatusCode::CONFLICT, "MARKET_DATA_NOT_LOADED"),
        AdvisorError::ForecastUnavailable => (StatusCode::CONFLICT, "NO_FORECAST"),
        AdvisorError::StrategyNotFound(_) => (StatusCode::NOT_FOUND, "STRATEGY_NOT_FOUND"),
        AdvisorError::Source(_) => (StatusCode::BAD_GATEWAY, "SOURCE_ERROR"),
        AdvisorError::Serialization(_) => (StatusCode::BAD_REQUEST, "BAD_PAYLOAD"),
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let loaded = state.engine.read().await.market_data_loaded();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        market_data_loaded: loaded,
        source: state.source.name().to_string(),
    })
}

/// Load a market snapshot supplied by the caller
pub async fn load_market_data(
    State(state): State<AppState>,
    Json(snapshot): Json<MarketSnapshot>,
) -> Json<LoadedResponse> {
    state.engine.write().await.load_market_data(snapshot);
    Json(LoadedResponse { loaded: true })
}

/// Pull a fresh snapshot from the configured source
pub async fn refresh_market_data(
    State(state): State<AppState>,
) -> Result<Json<LoadedResponse>, ApiError> {
    let snapshot = state.source.fetch_snapshot().await.map_err(|e| {
        tracing::error!("snapshot refresh failed: {}", e);
        api_error(&e)
    })?;

    state.engine.write().await.load_market_data(snapshot);
    Ok(Json(LoadedResponse { loaded: true }))
}

/// Replace the user profile
pub async fn set_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<UserProfile> {
    state.engine.write().await.set_user_profile(profile);
    Json(profile)
}

/// Replace the registered positions
pub async fn register_positions(
    State(state): State<AppState>,
    Json(positions): Json<Vec<Position>>,
) -> StatusCode {
    state.engine.write().await.register_positions(positions);
    StatusCode::NO_CONTENT
}

/// Top strategy pick with alternatives and market outlook
pub async fn get_recommendation(
    State(state): State<AppState>,
) -> Result<Json<Recommendation>, ApiError> {
    let recommendation = state
        .engine
        .read()
        .await
        .recommend_strategy()
        .map_err(|e| api_error(&e))?;

    Ok(Json(recommendation))
}

/// Project a strategy over a time horizon
pub async fn simulate_strategy(
    State(state): State<AppState>,
    Json(payload): Json<SimulateRequest>,
) -> Result<Json<SimulationResult>, ApiError> {
    let horizon = payload
        .time_horizon
        .as_deref()
        .map_or_else(TimeHorizon::default, TimeHorizon::parse_lenient);

    let result = state
        .engine
        .read()
        .await
        .simulate_strategy(&payload.strategy, horizon)
        .map_err(|e| api_error(&e))?;

    Ok(Json(result))
}

/// Narrative explanation for a named strategy
pub async fn explain_strategy(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let explanation = state
        .engine
        .read()
        .await
        .explanation(&name)
        .map_err(|e| api_error(&e))?;

    Ok(Json(ExplainResponse {
        strategy: name,
        explanation: explanation.render(),
    }))
}
