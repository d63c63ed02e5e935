//! End-to-end run of the sample -> evaluate -> filter -> reduce pipeline.

use approx::assert_relative_eq;
use nalgebra::DMatrix;

use frontier::{report, MarketData, ParetoFront, Sampler, SimulationConfig, SimulationRunner};

fn example_market() -> MarketData {
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
    MarketData::new(expected_returns, covariance, 0.001)
}

fn example_config() -> SimulationConfig {
    SimulationConfig {
        num_assets: 5,
        num_simulations: 2_000,
        min_assets: 2,
        max_assets: 4,
        seed: Some(42),
        sampler: Sampler::default(),
    }
}

#[test]
fn seeded_pipeline_produces_a_clean_front() {
    let runner = SimulationRunner::new(example_config(), example_market()).unwrap();
    let mut rng = runner.seeded_rng();
    let population = runner.run(&mut rng).unwrap();
    assert!(!population.is_empty());

    for portfolio in &population {
        assert_relative_eq!(portfolio.weights.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        assert!(portfolio.volatility >= 0.0);
        let active = portfolio.active_assets();
        assert!((2..=4).contains(&active));
    }

    let front = ParetoFront::build(population);
    assert!(!front.is_empty());
    for a in front.iter() {
        for b in front.iter() {
            assert!(!a.dominates(b));
        }
    }
}

#[test]
fn front_survives_a_rebuild_unchanged() {
    let runner = SimulationRunner::new(example_config(), example_market()).unwrap();
    let population = runner.run(&mut runner.seeded_rng()).unwrap();

    let front = ParetoFront::build(population);
    let rebuilt = ParetoFront::build(front.members().to_vec());
    assert_eq!(front.len(), rebuilt.len());
}

#[test]
fn reports_render_for_a_real_front() {
    let runner = SimulationRunner::new(example_config(), example_market()).unwrap();
    let population = runner.run(&mut runner.seeded_rng()).unwrap();
    let front = ParetoFront::build(population);

    let text = report::render_text(&front);
    assert!(text.starts_with("Pareto Front:\n"));
    assert_eq!(text.lines().count(), front.len() + 1);

    let json = report::to_json(&front).unwrap();
    assert!(json.contains("net_return"));
}
