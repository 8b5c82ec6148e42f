//! Monte Carlo simulation configuration.
//!
//! This module provides the validated configuration type and builder for
//! the π estimators.

use super::error::EstimatorError;

/// Maximum number of sample points allowed per run.
pub const MAX_SAMPLES: u64 = 1_000_000_000_000;

/// Maximum number of workers allowed as an explicit override.
pub const MAX_WORKERS: usize = 4096;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the sample count and the optional
/// worker-count and seed overrides. Use [`SimulationConfig::builder`] to
/// construct instances.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_samples(1_000_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 1_000_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of sample points to draw.
    n_samples: u64,
    /// Optional worker count override for the parallel path.
    n_workers: Option<usize>,
    /// Optional base seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of sample points.
    #[inline]
    pub fn n_samples(&self) -> u64 {
        self.n_samples
    }

    /// Returns the optional worker count override.
    #[inline]
    pub fn n_workers(&self) -> Option<usize> {
        self.n_workers
    }

    /// Returns the optional base seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the worker count the parallel path will use.
    ///
    /// The override wins when present; otherwise the available hardware
    /// thread count is queried at call time, never hard-coded.
    #[inline]
    pub fn effective_workers(&self) -> usize {
        self.n_workers.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] if:
    /// - `n_samples` is 0 or greater than [`MAX_SAMPLES`]
    /// - the worker override is 0 or greater than [`MAX_WORKERS`]
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(EstimatorError::InvalidSampleCount(self.n_samples));
        }
        if let Some(n_workers) = self.n_workers {
            if n_workers == 0 || n_workers > MAX_WORKERS {
                return Err(EstimatorError::InvalidWorkerCount(n_workers));
            }
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_samples(10_000_000)
///     .n_workers(8)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_samples: Option<u64>,
    n_workers: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of sample points.
    ///
    /// # Arguments
    ///
    /// * `n_samples` - Sample count in [1, 1_000_000_000_000]
    #[inline]
    pub fn n_samples(mut self, n_samples: u64) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets an explicit worker count for the parallel path.
    ///
    /// Without this override the parallel path uses all available
    /// hardware threads.
    #[inline]
    pub fn n_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = Some(n_workers);
        self
    }

    /// Sets the base seed for reproducibility.
    ///
    /// Default runs are wall-clock seeded; pin the seed in tests and
    /// benchmarks only.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidSampleCount`] if the sample count
    /// is missing or out of range, and
    /// [`EstimatorError::InvalidWorkerCount`] for a bad worker override.
    pub fn build(self) -> Result<SimulationConfig, EstimatorError> {
        let config = SimulationConfig {
            n_samples: self.n_samples.unwrap_or(0),
            n_workers: self.n_workers,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
