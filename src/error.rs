use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Sampled a degenerate all-zero allocation {attempts} times in a row")]
    DegenerateSample { attempts: usize },

    #[error("Invalid simulation parameters were passed: {0}")]
    InvalidConstraint(String),

    #[error("Portfolio variance {total_risk} is negative for weights {weights:?}")]
    NegativeVariance { total_risk: f64, weights: Vec<f64> },
}
