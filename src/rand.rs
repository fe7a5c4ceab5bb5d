//! Seeded RNG helpers for reproducible benchmark datasets.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A `SmallRng` seeded for reproducible runs.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Generate `len` integers drawn uniformly from `[lo, hi]`.
pub fn random_values(len: usize, lo: i64, hi: i64, seed: u64) -> Vec<i64> {
    let mut rng = seeded_rng(seed);
    (0..len).map(|_| rng.random_range(lo..=hi)).collect()
}
