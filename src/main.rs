use anyhow::Result;
use nalgebra::DMatrix;
use tracing_subscriber::EnvFilter;

use frontier::{report, MarketData, ParetoFront, Sampler, SimulationConfig, SimulationRunner};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Example data: expected returns and covariance matrix for five assets.
    let expected_returns = vec![0.12, 0.10, 0.14, 0.08, 0.11];
    let covariance = DMatrix::from_row_slice(
        5,
        5,
        &[
            0.1, 0.02, 0.04, 0.01, 0.03, //
            0.02, 0.15, 0.05, 0.02, 0.01, //
            0.04, 0.05, 0.2, 0.01, 0.02, //
            0.01, 0.02, 0.01, 0.3, 0.01, //
            0.03, 0.01, 0.02, 0.01, 0.25,
        ],
    );
    let market = MarketData::new(expected_returns, covariance, 0.001);

    let config = SimulationConfig {
        num_assets: 5,
        num_simulations: 10_000,
        min_assets: 2,
        max_assets: 4,
        seed: None,
        sampler: Sampler::default(),
    };

    let runner = SimulationRunner::new(config, market)?;
    let mut rng = runner.seeded_rng();
    let population = runner.run(&mut rng)?;
    let front = ParetoFront::build(population);

    print!("{}", report::render_text(&front));
    Ok(())
}
