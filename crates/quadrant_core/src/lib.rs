//! # Quadrant Core
//!
//! Monte Carlo π estimation kernel with sequential and parallel engines.
//!
//! The estimator draws random points in the 2×2 square centred on the
//! origin and counts the fraction that land inside the inscribed unit
//! circle; that fraction converges to π/4. The crate exists to measure
//! the speedup of parallelising this embarrassingly-parallel simulation,
//! so it ships both paths behind an identical contract:
//!
//! - [`estimate_pi_sequential`]: the full sampling loop on one thread.
//! - [`estimate_pi_parallel`]: the same budget distributed across all
//!   available hardware threads.
//!
//! Both are synchronous, blocking, and return a single finite estimate.
//! The parallel path gives every worker a private random stream and a
//! private hit counter, and merges the counts with one sum reduction
//! after the join, so the hot loop is free of locks and atomics.
//!
//! ## Usage Example
//!
//! ```rust
//! use quadrant_core::{estimate_pi_parallel, estimate_pi_sequential};
//!
//! let sequential = estimate_pi_sequential(1_000_000).unwrap();
//! let parallel = estimate_pi_parallel(1_000_000).unwrap();
//!
//! // Different random draws, same expectation
//! assert!((sequential - std::f64::consts::PI).abs() < 0.05);
//! assert!((parallel - std::f64::consts::PI).abs() < 0.05);
//! ```
//!
//! ## Module Structure
//!
//! - [`rng`]: seeded per-worker random streams
//! - [`mc`]: configuration, sampling loop, both estimation engines

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    estimate_pi_parallel, estimate_pi_sequential, EstimatorError, PiEstimate, PiEstimator,
    SimulationConfig,
};
pub use rng::SamplerRng;
