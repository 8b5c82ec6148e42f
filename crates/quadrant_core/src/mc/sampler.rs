//! Sampling loop and work partitioning.
//!
//! This module provides the hit-counting loop shared by both estimator
//! paths, and the static partitioning scheme that splits a sample budget
//! across parallel workers.

use crate::rng::SamplerRng;

/// Counts how many of `n_samples` random points land inside the unit circle.
///
/// Draws points with independent coordinates in [-1, 1) from the given
/// generator and counts those with `x² + y² ≤ 1`. The generator is owned
/// mutably by the calling thread for the whole loop; there are no other
/// side effects.
///
/// The returned count never exceeds `n_samples`.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::mc::count_hits;
/// use quadrant_core::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let hits = count_hits(&mut rng, 1_000);
/// assert!(hits <= 1_000);
/// ```
pub fn count_hits(rng: &mut SamplerRng, n_samples: u64) -> u64 {
    let mut hits = 0u64;
    for _ in 0..n_samples {
        let (x, y) = rng.gen_point();
        let distance_squared = x * x + y * y;
        if distance_squared <= 1.0 {
            hits += 1;
        }
    }
    hits
}

/// Returns the sample quota of one worker under static partitioning.
///
/// The budget is split into near-equal chunks: every worker receives
/// `n_samples / n_workers`, and the first `n_samples % n_workers` workers
/// receive one extra sample. Quotas over all workers sum to exactly
/// `n_samples`.
///
/// Exact chunk shape is not load-bearing for correctness, only for load
/// balance.
///
/// # Arguments
///
/// * `n_samples` - Total sample budget of the run
/// * `n_workers` - Number of participating workers (must be non-zero)
/// * `worker` - Worker ordinal in `0..n_workers`
#[inline]
pub fn worker_quota(n_samples: u64, n_workers: u64, worker: u64) -> u64 {
    debug_assert!(n_workers > 0);
    debug_assert!(worker < n_workers);

    let base = n_samples / n_workers;
    let remainder = n_samples % n_workers;
    base + u64::from(worker < remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_hits_zero_samples() {
        let mut rng = SamplerRng::from_seed(42);
        assert_eq!(count_hits(&mut rng, 0), 0);
    }

    #[test]
    fn test_count_hits_bounded_by_samples() {
        let mut rng = SamplerRng::from_seed(42);
        let hits = count_hits(&mut rng, 10_000);
        assert!(hits <= 10_000);
    }

    #[test]
    fn test_count_hits_near_expected_fraction() {
        // The expected hit fraction is π/4 ≈ 0.785; at 100k samples the
        // observed fraction is within a few standard deviations of it.
        let mut rng = SamplerRng::from_seed(42);
        let hits = count_hits(&mut rng, 100_000);
        let fraction = hits as f64 / 100_000.0;

        assert!(fraction > 0.75 && fraction < 0.82, "fraction = {}", fraction);
    }

    #[test]
    fn test_count_hits_reproducible() {
        let mut rng1 = SamplerRng::from_seed(7);
        let mut rng2 = SamplerRng::from_seed(7);

        assert_eq!(count_hits(&mut rng1, 5_000), count_hits(&mut rng2, 5_000));
    }

    #[test]
    fn test_worker_quota_even_split() {
        for worker in 0..4 {
            assert_eq!(worker_quota(100, 4, worker), 25);
        }
    }

    #[test]
    fn test_worker_quota_remainder_goes_first() {
        // 10 samples over 4 workers: quotas 3, 3, 2, 2.
        assert_eq!(worker_quota(10, 4, 0), 3);
        assert_eq!(worker_quota(10, 4, 1), 3);
        assert_eq!(worker_quota(10, 4, 2), 2);
        assert_eq!(worker_quota(10, 4, 3), 2);
    }

    #[test]
    fn test_worker_quota_fewer_samples_than_workers() {
        // 2 samples over 4 workers: quotas 1, 1, 0, 0.
        let quotas: Vec<u64> = (0..4).map(|w| worker_quota(2, 4, w)).collect();
        assert_eq!(quotas, vec![1, 1, 0, 0]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Property test: quotas sum to the total budget for any split.
        #[test]
        fn prop_quotas_sum_to_total(
            n_samples in 0u64..10_000_000,
            n_workers in 1u64..256,
        ) {
            let total: u64 = (0..n_workers)
                .map(|worker| worker_quota(n_samples, n_workers, worker))
                .sum();
            prop_assert_eq!(total, n_samples);
        }

        /// Property test: quotas differ by at most one sample.
        #[test]
        fn prop_quotas_balanced(
            n_samples in 0u64..10_000_000,
            n_workers in 1u64..256,
        ) {
            let quotas: Vec<u64> = (0..n_workers)
                .map(|worker| worker_quota(n_samples, n_workers, worker))
                .collect();
            let min = quotas.iter().min().copied().unwrap_or(0);
            let max = quotas.iter().max().copied().unwrap_or(0);
            prop_assert!(max - min <= 1);
        }
    }
}
