//! Monte Carlo π estimation kernel.
//!
//! This module provides both forms of the estimator: the sequential path,
//! which runs the full sampling loop on one thread, and the parallel path,
//! which distributes the same budget across all available hardware
//! threads with per-worker random streams and a final sum reduction.
//!
//! # Architecture
//!
//! ```text
//! PiEstimator
//! ├── SimulationConfig   (validated sample budget, worker/seed overrides)
//! ├── SamplerRng         (per-thread random streams)
//! └── Orchestration
//!     ├── worker_quota()   (static partitioning)
//!     ├── count_hits()     (hit-counting loop)
//!     └── sum reduction    (parallel path only)
//! ```
//!
//! # Shared-state policy
//!
//! The hit accumulation is the only logically shared quantity, and it is
//! never physically shared: each worker owns an exclusive local counter,
//! and the merge happens outside the concurrent region. No lock or atomic
//! instruction exists on the hot path.
//!
//! # Examples
//!
//! ## One-shot estimation
//!
//! ```rust
//! use quadrant_core::{estimate_pi_parallel, estimate_pi_sequential};
//!
//! let sequential = estimate_pi_sequential(1_000_000).unwrap();
//! let parallel = estimate_pi_parallel(1_000_000).unwrap();
//!
//! assert!((sequential - parallel).abs() < 0.1);
//! ```
//!
//! ## Configured estimation
//!
//! ```rust
//! use quadrant_core::mc::{PiEstimator, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_samples(1_000_000)
//!     .n_workers(4)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let estimator = PiEstimator::new(config).unwrap();
//! let result = estimator.run_parallel().unwrap();
//!
//! println!("π ≈ {:.10} from {} workers", result.estimate, result.n_workers);
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod sampler;

// Re-exports for convenient access
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_SAMPLES, MAX_WORKERS};
pub use error::EstimatorError;
pub use estimator::{estimate_pi_parallel, estimate_pi_sequential, PiEstimate, PiEstimator};
pub use sampler::{count_hits, worker_quota};
