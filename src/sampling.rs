use rand::distributions::Uniform;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{DEGENERATE_RETRY_CAP, RAW_DRAW_BOUND};
use crate::error::SimulationError;

/// Sampling modality for candidate allocations.
///
/// The goal is to draw raw non-negative weights according to different
/// modalities and normalize them into a unit-sum allocation vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Sampler {
    /// Integer draws in `[0, bound)`, then normalized.
    UniformInteger { bound: u32 },
    /// Real draws in `[0, 1)`, then normalized.
    UniformReal,
}

impl Default for Sampler {
    fn default() -> Self {
        Sampler::UniformInteger {
            bound: RAW_DRAW_BOUND,
        }
    }
}

impl Sampler {
    /// Draws a fresh normalized allocation vector of length `num_assets`.
    ///
    /// An all-zero draw cannot be normalized; it is retried up to
    /// [`DEGENERATE_RETRY_CAP`] times before failing with
    /// `DegenerateSample`, so NaN weights never escape.
    pub fn sample_weights<R: Rng>(
        &self,
        rng: &mut R,
        num_assets: usize,
    ) -> Result<Vec<f64>, SimulationError> {
        for attempt in 0..DEGENERATE_RETRY_CAP {
            let mut raw = self.draw_raw(rng, num_assets);
            let total: f64 = raw.iter().sum();
            if total > 0.0 {
                raw.iter_mut().for_each(|weight| *weight /= total);
                return Ok(raw);
            }
            warn!(attempt, "Degenerate all-zero draw, resampling.");
        }
        Err(SimulationError::DegenerateSample {
            attempts: DEGENERATE_RETRY_CAP,
        })
    }

    fn draw_raw<R: Rng>(&self, rng: &mut R, num_assets: usize) -> Vec<f64> {
        match self {
            Sampler::UniformInteger { bound } => {
                let uniform = Uniform::new(0u32, *bound);
                (0..num_assets)
                    .map(|_| f64::from(rng.sample(uniform)))
                    .collect()
            }
            Sampler::UniformReal => {
                let uniform = Uniform::new(0.0f64, 1.0);
                (0..num_assets).map(|_| rng.sample(uniform)).collect()
            }
        }
    }
}
