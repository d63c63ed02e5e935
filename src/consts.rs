/// Tolerance used for float comparisons throughout the crate.
pub const FLOAT_COMPARISON_EPSILON: f64 = 1e-9;

/// A weight strictly above this counts the asset as held, for the
/// min/max asset-count constraint.
pub const ACTIVE_WEIGHT_THRESHOLD: f64 = 0.01;

/// Upper bound (exclusive) of the raw integer draws in the integer
/// sampling modality.
pub const RAW_DRAW_BOUND: u32 = 100;

/// How many times a degenerate all-zero draw is retried before the
/// sampler gives up.
pub const DEGENERATE_RETRY_CAP: usize = 8;
