//! Sequential and parallel Monte Carlo π estimators.
//!
//! This module provides the orchestration layer for the estimation kernel:
//!
//! 1. Random sampling (via [`SamplerRng`](crate::rng::SamplerRng))
//! 2. Hit counting (via [`count_hits`](super::sampler::count_hits))
//! 3. Work partitioning and sum reduction for the parallel path
//!
//! # Parallel Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  Static partition of N                  │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐    │
//! │  │ Worker 0│  │ Worker 1│  │ Worker 2│  │ Worker t│    │
//! │  │ own RNG │  │ own RNG │  │ own RNG │  │ own RNG │    │
//! │  │ own hits│  │ own hits│  │ own hits│  │ own hits│    │
//! │  └────┬────┘  └────┬────┘  └────┬────┘  └────┬────┘    │
//! │       └────────────┴─────┬──────┴────────────┘         │
//! │                          ▼                             │
//! │                    sum reduction                       │
//! │                          ▼                             │
//! │                  4 × hits / N                          │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Each worker owns its generator and hit counter outright, so the hot
//! loop takes no locks and touches no shared state; the single
//! synchronisation point is the final join/sum, which happens once per
//! call. Summation is commutative and associative, so worker completion
//! order cannot affect the result.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::config::SimulationConfig;
use super::error::EstimatorError;
use super::sampler::{count_hits, worker_quota};
use crate::rng::{clock_seed, SamplerRng};

/// Result of one estimation run.
///
/// Derived once from the final hit count and never mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::mc::{PiEstimator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_samples(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = PiEstimator::new(config).unwrap().run_sequential();
/// println!("π ≈ {:.10} (error {:.2e})", result.estimate, result.abs_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate {
    /// The π estimate, `4 × hits / n_samples`.
    pub estimate: f64,
    /// Number of sample points that landed inside the unit circle.
    pub hits: u64,
    /// Number of sample points drawn.
    pub n_samples: u64,
    /// Number of workers that produced the estimate (1 for sequential).
    pub n_workers: usize,
}

impl PiEstimate {
    /// Derives an estimate from a final hit count.
    ///
    /// `n_samples` is validated non-zero upstream, so the division is
    /// always defined. Both counts are exactly representable in `f64`
    /// for every value the sampler can produce.
    fn from_hits(hits: u64, n_samples: u64, n_workers: usize) -> Self {
        debug_assert!(hits <= n_samples);

        Self {
            estimate: 4.0 * hits as f64 / n_samples as f64,
            hits,
            n_samples,
            n_workers,
        }
    }

    /// Returns the absolute error against `std::f64::consts::PI`.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.estimate - std::f64::consts::PI).abs()
    }
}

/// Monte Carlo π estimation engine.
///
/// Holds a validated [`SimulationConfig`] and exposes the sequential and
/// parallel estimation paths over it. Both paths consume the same sample
/// budget and are unbiased estimators of the same quantity; repeated runs
/// converge to the same expected value as the budget grows.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::mc::{PiEstimator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_samples(1_000_000)
///     .build()
///     .unwrap();
///
/// let estimator = PiEstimator::new(config).unwrap();
///
/// let sequential = estimator.run_sequential();
/// let parallel = estimator.run_parallel().unwrap();
///
/// assert!((0.0..=4.0).contains(&sequential.estimate));
/// assert!((0.0..=4.0).contains(&parallel.estimate));
/// ```
#[derive(Clone, Debug)]
pub struct PiEstimator {
    config: SimulationConfig,
}

impl PiEstimator {
    /// Creates a new estimator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the full sampling loop on the calling thread.
    ///
    /// One generator, one hit counter, `n_samples` draws. Total for every
    /// validated configuration: always terminates and always returns a
    /// finite estimate in [0, 4].
    pub fn run_sequential(&self) -> PiEstimate {
        let n_samples = self.config.n_samples();
        let mut rng = match self.config.seed() {
            Some(seed) => SamplerRng::from_seed(seed),
            None => SamplerRng::from_clock(0),
        };

        let hits = count_hits(&mut rng, n_samples);
        PiEstimate::from_hits(hits, n_samples, 1)
    }

    /// Runs the sampling loop distributed across a worker pool.
    ///
    /// The pool is sized from the configuration's worker override, or the
    /// available hardware thread count queried at call time. The sample
    /// budget is split into near-equal static quotas; every worker owns a
    /// private generator (base seed mixed with its ordinal) and a private
    /// hit counter, and the per-worker counts are combined by a single sum
    /// reduction after all workers finish.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::ThreadPool`] if the worker pool cannot be
    /// built (resource exhaustion). The call is not retried and does not
    /// fall back to the sequential path.
    pub fn run_parallel(&self) -> Result<PiEstimate, EstimatorError> {
        let n_samples = self.config.n_samples();
        let n_workers = self.config.effective_workers();
        let base_seed = self.config.seed().unwrap_or_else(clock_seed);

        let pool = ThreadPoolBuilder::new().num_threads(n_workers).build()?;

        let hits: u64 = pool.install(|| {
            (0..n_workers as u64)
                .into_par_iter()
                .map(|worker| {
                    let quota = worker_quota(n_samples, n_workers as u64, worker);
                    let mut rng = SamplerRng::for_stream(base_seed, worker);
                    count_hits(&mut rng, quota)
                })
                .sum()
        });

        Ok(PiEstimate::from_hits(hits, n_samples, n_workers))
    }
}

/// Estimates π on a single thread.
///
/// Convenience entry point over [`PiEstimator`]: wall-clock seeded, with
/// the full sampling loop run on the calling thread.
///
/// # Arguments
///
/// * `sample_count` - Number of random points to draw
///
/// # Errors
///
/// Returns [`EstimatorError::InvalidSampleCount`] if `sample_count` is
/// zero or above the supported maximum.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::estimate_pi_sequential;
///
/// let estimate = estimate_pi_sequential(100_000).unwrap();
/// assert!((0.0..=4.0).contains(&estimate));
/// ```
pub fn estimate_pi_sequential(sample_count: u64) -> Result<f64, EstimatorError> {
    let config = SimulationConfig::builder().n_samples(sample_count).build()?;
    Ok(PiEstimator::new(config)?.run_sequential().estimate)
}

/// Estimates π across all available hardware threads.
///
/// Convenience entry point over [`PiEstimator`]: wall-clock seeded, with
/// the sample budget distributed over a pool sized to the machine.
/// Statistically equivalent in expectation to
/// [`estimate_pi_sequential`] for the same `sample_count`.
///
/// # Arguments
///
/// * `sample_count` - Number of random points to draw
///
/// # Errors
///
/// Returns [`EstimatorError::InvalidSampleCount`] for a zero or oversized
/// count, and [`EstimatorError::ThreadPool`] if the worker pool cannot be
/// acquired.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::estimate_pi_parallel;
///
/// let estimate = estimate_pi_parallel(100_000).unwrap();
/// assert!((0.0..=4.0).contains(&estimate));
/// ```
pub fn estimate_pi_parallel(sample_count: u64) -> Result<f64, EstimatorError> {
    let config = SimulationConfig::builder().n_samples(sample_count).build()?;
    let result = PiEstimator::new(config)?.run_parallel()?;
    Ok(result.estimate)
}
