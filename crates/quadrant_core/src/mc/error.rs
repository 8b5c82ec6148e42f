//! Error types for the Monte Carlo estimation kernel.
//!
//! This module defines structured error types for configuration validation
//! and worker-pool acquisition failures.

use thiserror::Error;

/// Categorised estimator errors.
///
/// Construction-time validation failures and the single runtime failure
/// mode (worker pool acquisition) of the parallel path.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::mc::EstimatorError;
///
/// let err = EstimatorError::InvalidSampleCount(0);
/// assert!(err.to_string().contains("sample count 0"));
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Sample count outside the valid range [1, 1_000_000_000_000].
    ///
    /// Zero is rejected explicitly: the final division by the sample
    /// count would otherwise be undefined.
    #[error("invalid sample count {0}: must be in range [1, 1_000_000_000_000]")]
    InvalidSampleCount(u64),

    /// Worker count override outside the valid range [1, 4096].
    #[error("invalid worker count {0}: must be in range [1, 4096]")]
    InvalidWorkerCount(usize),

    /// The parallel path failed to acquire its worker thread pool.
    ///
    /// Fatal to the call; never retried and never degraded to the
    /// sequential path.
    #[error("failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimatorError::InvalidSampleCount(0);
        assert!(err.to_string().contains("invalid sample count 0"));

        let err = EstimatorError::InvalidWorkerCount(0);
        assert!(err.to_string().contains("invalid worker count 0"));
    }
}
