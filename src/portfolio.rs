use itertools::izip;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::consts::{ACTIVE_WEIGHT_THRESHOLD, FLOAT_COMPARISON_EPSILON};
use crate::error::SimulationError;
use crate::market::MarketData;

/// An evaluated candidate portfolio. Produced complete by
/// [`Portfolio::evaluate`] and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Normalized allocation weights, one per asset, summing to 1.
    pub weights: Vec<f64>,
    /// Expected return net of transaction costs.
    pub net_return: f64,
    /// Standard deviation of the portfolio return.
    pub volatility: f64,
    pub transaction_cost: f64,
}

impl Portfolio {
    /// Evaluates a weight vector against the market and returns the
    /// finished portfolio.
    ///
    /// # Arguments
    /// * `weights`: normalized allocation weights (length must match the
    ///   market's asset universe).
    /// * `market`: expected returns, covariance matrix, and cost rate.
    ///
    /// # Returns
    /// The evaluated `Portfolio`, or `DimensionMismatch` /
    /// `NegativeVariance` when the inputs are inconsistent.
    pub fn evaluate(weights: Vec<f64>, market: &MarketData) -> Result<Portfolio, SimulationError> {
        let num_assets = market.expected_returns.len();
        if weights.len() != num_assets {
            return Err(SimulationError::DimensionMismatch {
                expected: num_assets,
                actual: weights.len(),
            });
        }
        if market.covariance.nrows() != num_assets || market.covariance.ncols() != num_assets {
            return Err(SimulationError::DimensionMismatch {
                expected: num_assets,
                actual: market.covariance.nrows().max(market.covariance.ncols()),
            });
        }

        let expected_return: f64 = izip!(&weights, &market.expected_returns)
            .map(|(weight, asset_return)| weight * asset_return)
            .sum();

        // Full quadratic form w' Σ w over the covariance matrix.
        let weight_vector = DVector::from_column_slice(&weights);
        let total_risk = (weight_vector.transpose() * &market.covariance * &weight_vector)[(0, 0)];

        if total_risk < -FLOAT_COMPARISON_EPSILON {
            return Err(SimulationError::NegativeVariance {
                total_risk,
                weights,
            });
        }
        // Tiny negative residue from floating arithmetic clamps to zero.
        let volatility = total_risk.max(0.0).sqrt();

        // Cost is proportional to the total allocation; the sum is ~1
        // after normalization.
        let transaction_cost = market.transaction_cost_rate * weights.iter().sum::<f64>();
        let net_return = expected_return - transaction_cost;

        Ok(Portfolio {
            weights,
            net_return,
            volatility,
            transaction_cost,
        })
    }

    /// Pareto dominance over the (net return, volatility) objectives:
    /// at least as good on both, strictly better on at least one.
    pub fn dominates(&self, other: &Portfolio) -> bool {
        self.net_return >= other.net_return
            && self.volatility <= other.volatility
            && (self.net_return > other.net_return || self.volatility < other.volatility)
    }

    /// Number of assets actually held, i.e. with weight strictly above
    /// the activity threshold.
    pub fn active_assets(&self) -> usize {
        self.weights
            .iter()
            .filter(|&&weight| weight > ACTIVE_WEIGHT_THRESHOLD)
            .count()
    }

    /// Whether two portfolios land on the exact same point of the
    /// objective plane. Used as the front's uniqueness key.
    pub fn same_objectives(&self, other: &Portfolio) -> bool {
        self.net_return == other.net_return && self.volatility == other.volatility
    }
}
