//! Seeded subsampling
//!
//! The normality check runs on a bounded subsample of each group. The
//! generator is seeded from a constant so repeated runs draw the same values.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Draws `size` values from `values` without replacement
///
/// A fresh generator is seeded from `seed` on every call, so two calls with
/// the same inputs return the same values in the same order. `size` is
/// clamped to the number of available values.
pub fn sample_without_replacement(values: &[f64], size: usize, seed: u64) -> Vec<f64> {
    let size = size.min(values.len());
    let mut rng = StdRng::seed_from_u64(seed);

    rand::seq::index::sample(&mut rng, values.len(), size)
        .into_iter()
        .map(|index| values[index])
        .collect()
}
