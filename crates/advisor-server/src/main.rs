//! yield-advisor HTTP Server
//!
//! Axum-based dispatcher over the strategy recommendation engine. The
//! server owns the single-writer discipline the engine requires: every
//! mutation goes through one RwLock write guard.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yield_advisor::{AdvisorEngine, FixtureSource, MarketDataSource, UserProfile};

use crate::handlers::{
    explain_strategy, get_recommendation, health_check, load_market_data,
    refresh_market_data, register_positions, set_profile, simulate_strategy,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Market data source. Live acquisition belongs to an external
    // collaborator; the fixture carries the reference market until one
    // pushes snapshots through the API.
    let source: Arc<dyn MarketDataSource> = Arc::new(FixtureSource::new());

    let mut engine = AdvisorEngine::new(UserProfile::default());
    match source.fetch_snapshot().await {
        Ok(snapshot) => {
            engine.load_market_data(snapshot);
            tracing::info!("✓ Market data loaded from {}", source.name());
        }
        Err(e) => {
            tracing::warn!("⚠ No market data at startup: {}", e);
            tracing::warn!("  Load a snapshot via POST /api/market-data");
        }
    }

    let state = AppState {
        engine: Arc::new(RwLock::new(engine)),
        source,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/market-data", post(load_market_data))
        .route("/api/market-data/refresh", post(refresh_market_data))
        .route("/api/profile", put(set_profile))
        .route("/api/positions", put(register_positions))
        .route("/api/recommendation", get(get_recommendation))
        .route("/api/simulate", post(simulate_strategy))
        .route("/api/explain/{name}", get(explain_strategy))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("advisor-server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                   - Health check");
    tracing::info!("  POST /api/market-data          - Load a market snapshot");
    tracing::info!("  POST /api/market-data/refresh  - Refresh from the source");
    tracing::info!("  PUT  /api/profile              - Replace user profile");
    tracing::info!("  PUT  /api/positions            - Replace positions");
    tracing::info!("  GET  /api/recommendation       - Ranked strategy picks");
    tracing::info!("  POST /api/simulate             - Simulate a strategy");
    tracing::info!("  GET  /api/explain/{{name}}       - Explain a strategy");

    axum::serve(listener, app).await?;

    Ok(())
}
