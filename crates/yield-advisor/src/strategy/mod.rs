//! Strategy Generation, Estimation, and Ranking
//!
//! The pipeline that turns a market outlook and a user profile into a
//! ranked set of candidate allocation strategies.

pub mod catalog;
pub mod estimator;
pub mod ranking;

pub use catalog::generate_strategies;
pub use estimator::{ReturnsEstimate, estimate_returns};
pub use ranking::rank_strategies;
