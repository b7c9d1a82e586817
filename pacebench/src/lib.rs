#![warn(missing_docs)]
//! # PaceBench
//!
//! Micro-benchmark harness for Rust: repeated timed samples, symmetric
//! outlier trimming, summary statistics and pairwise comparison.
//!
//! PaceBench provides:
//! - **Deterministic pipeline**: setup, warm-up, N samples of M iterations, trimmed summary
//! - **Robust statistics**: trimmed mean, median, min, max and standard deviation
//! - **Comparisons**: `"2.50x faster"` / `"1.53x slower"` summaries with percent change
//! - **Pluggable time source**: the [`Clock`] trait makes runs reproducible in tests
//! - **CLI harness**: filtering, human/JSON/CSV output and baseline regression checks
//!
//! ## Quick Start
//!
//! ```
//! use pacebench::prelude::*;
//!
//! let config = BenchmarkConfig::new("sum")
//!     .iterations(1_000)
//!     .warmup_iterations(100)
//!     .samples(5);
//! let runner = BenchmarkRunner::new(config);
//!
//! let result = runner.run(|| (0..256u64).sum::<u64>()).unwrap();
//! print!("{}", format_results(&result));
//! ```
//!
//! ## Comparing Two Work Units
//!
//! ```
//! use pacebench::prelude::*;
//!
//! let runner = BenchmarkRunner::new(BenchmarkConfig::new("cmp").iterations(500).samples(3));
//! let a = runner.run(|| vec![0u8; 64]).unwrap();
//! let b = runner.run(|| vec![0u8; 4096]).unwrap();
//!
//! let cmp = compare(&a, &b).unwrap();
//! assert!(cmp.summary.ends_with("faster") || cmp.summary.ends_with("slower"));
//! ```
//!
//! ## Benchmark Binaries
//!
//! ```no_run
//! use pacebench::Suite;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut suite = Suite::new();
//!     suite.bench("format", |r| r.run(|| format!("{}-{}", 1, 2)));
//!     pacebench::run(suite)
//! }
//! ```

// Re-export core types
pub use pacebench_core::{
    BenchError, BenchmarkConfig, BenchmarkOptions, BenchmarkResult, BenchmarkRunner, Clock,
    DEFAULT_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_WARMUP_ITERATIONS, MonotonicClock, Phase, Timer,
    WorkUnitError, compare,
};

// Re-export stats
pub use pacebench_stats::{
    ComparisonResult, DEFAULT_TRIM_FRACTION, Direction, SummaryStatistics, TrimPolicy,
    compare_means, compute_summary, trim_samples,
};

// Re-export report output
pub use pacebench_report::{
    OutputFormat, Report, format_comparison, format_duration, format_results, group_thousands,
};

// Re-export the harness
pub use pacebench_cli::{Cli, PaceConfig, Suite};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchError, BenchmarkConfig, BenchmarkResult, BenchmarkRunner, Clock, ComparisonResult,
        Direction, Suite, compare, format_comparison, format_results,
    };
}

/// Run the PaceBench CLI harness over a suite.
///
/// Call this from your benchmark binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     let mut suite = pacebench::Suite::new();
///     // register benchmarks...
///     pacebench::run(suite)
/// }
/// ```
pub use pacebench_cli::run;
