//! Quadrant benchmark CLI
//!
//! Runs the sequential and parallel π estimators over the same sample
//! budget, times both under a wall clock, and reports the estimates with
//! the observed speedup.

use anyhow::Result;
use clap::Parser;
use quadrant_core::mc::{PiEstimator, SimulationConfig};
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line arguments for the benchmark run.
#[derive(Debug, Parser)]
#[command(name = "quadrant", about = "Monte Carlo π estimation speedup benchmark")]
struct Args {
    /// Number of random sample points to draw per estimator.
    #[arg(long, default_value_t = 10_000_000)]
    samples: u64,

    /// Worker count for the parallel estimator (defaults to all hardware threads).
    #[arg(long)]
    threads: Option<usize>,

    /// Base seed override; default runs are wall-clock seeded.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("quadrant_cli=info".parse()?))
        .init();

    let args = Args::parse();

    let mut builder = SimulationConfig::builder().n_samples(args.samples);
    if let Some(threads) = args.threads {
        builder = builder.n_workers(threads);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let estimator = PiEstimator::new(builder.build()?)?;

    tracing::info!(samples = args.samples, "timing sequential estimator");
    let start = Instant::now();
    let sequential = estimator.run_sequential();
    let sequential_elapsed = start.elapsed();
    tracing::info!(
        elapsed_s = sequential_elapsed.as_secs_f64(),
        "sequential estimator finished"
    );

    tracing::info!(samples = args.samples, "timing parallel estimator");
    let start = Instant::now();
    let parallel = estimator.run_parallel()?;
    let parallel_elapsed = start.elapsed();
    tracing::info!(
        elapsed_s = parallel_elapsed.as_secs_f64(),
        workers = parallel.n_workers,
        "parallel estimator finished"
    );

    println!(
        "π = {:.10} (sequential, {:.6} s)",
        sequential.estimate,
        sequential_elapsed.as_secs_f64()
    );
    println!(
        "π = {:.10} (parallel, {:.6} s, {} workers)",
        parallel.estimate,
        parallel_elapsed.as_secs_f64(),
        parallel.n_workers
    );

    let parallel_secs = parallel_elapsed.as_secs_f64();
    if parallel_secs > 0.0 {
        println!(
            "speedup = {:.2}x",
            sequential_elapsed.as_secs_f64() / parallel_secs
        );
    }

    Ok(())
}
