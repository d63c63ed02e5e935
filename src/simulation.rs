use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::SimulationError;
use crate::market::{MarketData, SimulationConfig};
use crate::portfolio::Portfolio;

/// Orchestrates the Monte Carlo loop: sample an allocation, evaluate
/// it, and keep it only when the asset-count constraint holds.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    config: SimulationConfig,
    market: MarketData,
}

impl SimulationRunner {
    /// Validates the configuration and market inputs before anything
    /// runs; all fatal parameter errors surface here.
    pub fn new(config: SimulationConfig, market: MarketData) -> Result<Self, SimulationError> {
        config.validate()?;
        market.validate(config.num_assets)?;
        Ok(SimulationRunner { config, market })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn market(&self) -> &MarketData {
        &self.market
    }

    /// The process-wide random source for this run: seeded from the
    /// config when a seed is given (tests, replays), from entropy
    /// otherwise. Created once, never reseeded mid-run.
    pub fn seeded_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Runs `num_simulations` iterations and returns the surviving
    /// population in generation order. Callers must not rely on any
    /// other ordering; the population size itself is probabilistic
    /// unless the rng is seeded.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Vec<Portfolio>, SimulationError> {
        let mut population = Vec::new();

        for _ in 0..self.config.num_simulations {
            let weights = self
                .config
                .sampler
                .sample_weights(rng, self.config.num_assets)?;
            let portfolio = Portfolio::evaluate(weights, &self.market)?;

            let active = portfolio.active_assets();
            if active >= self.config.min_assets && active <= self.config.max_assets {
                population.push(portfolio);
            }
        }

        info!(
            retained = population.len(),
            attempts = self.config.num_simulations,
            "Simulation complete."
        );
        Ok(population)
    }
}
