//! Application State

use std::sync::Arc;

use tokio::sync::RwLock;

use yield_advisor::{AdvisorEngine, MarketDataSource};

/// Shared application state
///
/// The engine has no internal locking, so all mutation goes through the
/// write half of the lock - one writer at a time, readers in parallel.
#[derive(Clone)]
pub struct AppState {
    /// The strategy recommendation engine
    pub engine: Arc<RwLock<AdvisorEngine>>,

    /// Where market snapshots come from on refresh
    pub source: Arc<dyn MarketDataSource>,
}
