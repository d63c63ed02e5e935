use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::sampling::Sampler;

/// Asset universe for one simulation run. Immutable once constructed.
///
/// The covariance matrix is expected to be symmetric positive
/// semi-definite; this is a documented precondition, not something the
/// evaluator enforces up front. An invalid matrix surfaces later as a
/// `NegativeVariance` error.
#[derive(Debug, Clone)]
pub struct MarketData {
    pub expected_returns: Vec<f64>,
    pub covariance: DMatrix<f64>,
    pub transaction_cost_rate: f64,
}

impl MarketData {
    pub fn new(
        expected_returns: Vec<f64>,
        covariance: DMatrix<f64>,
        transaction_cost_rate: f64,
    ) -> Self {
        MarketData {
            expected_returns,
            covariance,
            transaction_cost_rate,
        }
    }

    pub fn num_assets(&self) -> usize {
        self.expected_returns.len()
    }

    /// Checks that the market inputs agree with the configured universe
    /// size and that the cost rate makes sense.
    pub fn validate(&self, num_assets: usize) -> Result<(), SimulationError> {
        if self.expected_returns.len() != num_assets {
            return Err(SimulationError::DimensionMismatch {
                expected: num_assets,
                actual: self.expected_returns.len(),
            });
        }
        if self.covariance.nrows() != num_assets || self.covariance.ncols() != num_assets {
            return Err(SimulationError::DimensionMismatch {
                expected: num_assets,
                actual: self.covariance.nrows().max(self.covariance.ncols()),
            });
        }
        if self.transaction_cost_rate < 0.0 {
            return Err(SimulationError::InvalidConstraint(
                "Transaction cost rate cannot be negative.".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub num_assets: usize,
    pub num_simulations: usize,
    /// Inclusive lower bound on the number of held assets.
    pub min_assets: usize,
    /// Inclusive upper bound on the number of held assets.
    pub max_assets: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub sampler: Sampler,
}

impl SimulationConfig {
    /// Fails fast on constraints that would make the run meaningless,
    /// before any sampling happens.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_assets == 0 {
            return Err(SimulationError::InvalidConstraint(
                "Number of assets cannot be zero.".into(),
            ));
        }
        if self.num_simulations == 0 {
            return Err(SimulationError::InvalidConstraint(
                "Number of simulations cannot be zero.".into(),
            ));
        }
        if self.min_assets > self.max_assets {
            return Err(SimulationError::InvalidConstraint(format!(
                "min_assets ({}) cannot exceed max_assets ({}).",
                self.min_assets, self.max_assets
            )));
        }
        if self.max_assets > self.num_assets {
            return Err(SimulationError::InvalidConstraint(format!(
                "max_assets ({}) cannot exceed the number of assets ({}).",
                self.max_assets, self.num_assets
            )));
        }
        Ok(())
    }
}
