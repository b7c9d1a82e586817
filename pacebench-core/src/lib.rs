#![warn(missing_docs)]
//! PaceBench Core - Measurement Runtime
//!
//! This crate provides the execution side of a benchmark:
//! - `BenchmarkConfig` / `BenchmarkOptions` with validation and defaults
//! - `BenchmarkRunner` for the setup → warm-up → sample → trim pipeline
//! - `Clock` abstraction with a monotonic `Instant`-backed implementation
//! - `BenchmarkResult` and pairwise `compare`
//!
//! ```
//! use pacebench_core::{BenchmarkConfig, BenchmarkRunner, compare};
//!
//! let config = BenchmarkConfig::new("sum")
//!     .iterations(1_000)
//!     .warmup_iterations(100)
//!     .samples(5);
//! let runner = BenchmarkRunner::new(config);
//!
//! let result = runner.run(|| (0..64u64).sum::<u64>()).unwrap();
//! assert!(result.min <= result.median && result.median <= result.max);
//! ```

mod clock;
mod config;
mod error;
mod result;
mod runner;

pub use clock::{Clock, MonotonicClock, Timer, duration_to_ms};
pub use config::{
    BenchmarkConfig, BenchmarkOptions, DEFAULT_ITERATIONS, DEFAULT_SAMPLES,
    DEFAULT_WARMUP_ITERATIONS,
};
pub use error::{BenchError, Phase, Result, WorkUnitError};
pub use result::{BenchmarkResult, compare};
pub use runner::BenchmarkRunner;
