//! Monte Carlo portfolio simulation with Pareto-front selection.
//!
//! Random candidate portfolios are sampled, evaluated on net return
//! and volatility, filtered by an asset-count constraint, and reduced
//! to their non-dominated subset.

// Modules
pub mod consts;
pub mod error;
pub mod market;
pub mod pareto;
pub mod portfolio;
pub mod report;
pub mod sampling;
pub mod simulation;

pub use error::SimulationError;
pub use market::{MarketData, SimulationConfig};
pub use pareto::ParetoFront;
pub use portfolio::Portfolio;
pub use sampling::Sampler;
pub use simulation::SimulationRunner;
