//! Benchmark Execution
//!
//! Runs planned benchmarks one after another in the current process.
//!
//! ## Data Flow
//!
//! ```text
//! BenchmarkDef (from Suite)
//!        │
//!        ▼
//!   BenchmarkOptions  (defaults → pace.toml → CLI → per-benchmark)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ BenchmarkRunner  │  Setup → Warm-up → Samples → Trim
//! └────────┬─────────┘
//!          │
//!          ▼
//!  BenchExecutionResult (config, result or error)
//! ```
//!
//! A benchmark that returns an error is recorded and execution moves on.
//! Panics are not caught.

use crate::suite::BenchmarkDef;
use indicatif::{ProgressBar, ProgressStyle};
use pacebench_core::{
    BenchError, BenchmarkConfig, BenchmarkOptions, BenchmarkResult, BenchmarkRunner,
};
use std::time::Instant;
use tracing::{debug, warn};

/// Result from executing a single benchmark
#[derive(Debug)]
pub struct BenchExecutionResult {
    pub benchmark_id: String,
    pub group: String,
    /// Resolved configuration, `None` if the layered options were invalid
    pub config: Option<BenchmarkConfig>,
    pub outcome: Result<BenchmarkResult, BenchError>,
    pub duration_ms: f64,
}

impl BenchExecutionResult {
    /// Whether the benchmark completed
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Execute benchmarks and produce results
pub struct Executor {
    options: BenchmarkOptions,
    show_progress: bool,
}

impl Executor {
    /// Executor applying `options` beneath each benchmark's own overrides
    pub fn new(options: BenchmarkOptions) -> Self {
        Self {
            options,
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Configuration a benchmark will run with
    ///
    /// Per-benchmark overrides win over the executor's options; the name is
    /// always the benchmark id.
    pub fn resolve_for_benchmark(
        &self,
        bench: &BenchmarkDef,
    ) -> pacebench_core::Result<BenchmarkConfig> {
        let mut layered = self.options.merge(&bench.options);
        layered.name = Some(bench.id.clone());
        layered.resolve()
    }

    /// Execute all provided benchmarks in order
    pub fn execute<'a>(
        &self,
        benchmarks: impl IntoIterator<Item = &'a mut BenchmarkDef>,
    ) -> Vec<BenchExecutionResult> {
        let benchmarks: Vec<&mut BenchmarkDef> = benchmarks.into_iter().collect();

        let pb = if self.show_progress {
            ProgressBar::new(benchmarks.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut results = Vec::with_capacity(benchmarks.len());
        for bench in benchmarks {
            pb.set_message(bench.id.clone());
            let result = self.execute_single(bench);
            if let Err(e) = &result.outcome {
                pb.suspend(|| {
                    eprintln!("Warning: benchmark '{}' failed: {}", result.benchmark_id, e)
                });
            }
            results.push(result);
            pb.inc(1);
        }

        pb.finish_with_message("Complete");
        results
    }

    /// Execute a single benchmark
    fn execute_single(&self, bench: &mut BenchmarkDef) -> BenchExecutionResult {
        let start = Instant::now();

        let (config, outcome) = match self.resolve_for_benchmark(bench) {
            Ok(config) => {
                debug!(benchmark = %bench.id, ?config, "running benchmark");
                let runner = BenchmarkRunner::new(config.clone());
                let outcome = bench.run(&runner);
                (Some(config), outcome)
            }
            Err(e) => (None, Err(e)),
        };

        if let Err(e) = &outcome {
            warn!(benchmark = %bench.id, kind = e.kind(), error = %e, "benchmark failed");
        }

        BenchExecutionResult {
            benchmark_id: bench.id.clone(),
            group: bench.group.clone(),
            config,
            outcome,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }
}
