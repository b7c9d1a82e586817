//! BenchmarkRunner - The Measurement Pipeline
//!
//! A single linear pipeline per run:
//! validate → setup → warm-up → sample loop → trim → summarize.
//!
//! Each sample times `iterations` back-to-back executions of the work unit.
//! Work-unit return values pass through [`std::hint::black_box`] so the
//! optimizer cannot discard the work. Errors returned by a work unit abort
//! the run immediately; panics are not caught and unwind through the runner.
//!
//! The runner keeps no state between runs. There is no timeout: a work unit
//! that never returns hangs the run.

use crate::clock::{Clock, MonotonicClock, Timer, duration_to_ms};
use crate::config::BenchmarkConfig;
use crate::error::{BenchError, Phase, Result, WorkUnitError};
use crate::result::BenchmarkResult;
use pacebench_stats::compute_summary;
use std::convert::Infallible;
use std::future::Future;
use std::hint::black_box;
use tracing::{debug, trace};

/// Runs a work unit under a [`BenchmarkConfig`] and summarizes the timings
#[derive(Debug, Clone)]
pub struct BenchmarkRunner<C: Clock = MonotonicClock> {
    config: BenchmarkConfig,
    clock: C,
}

impl BenchmarkRunner<MonotonicClock> {
    /// Create a runner that uses the monotonic wall clock
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> BenchmarkRunner<C> {
    /// Create a runner with a custom time source
    pub fn with_clock(config: BenchmarkConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Configuration this runner executes
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Time source used for samples
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Benchmark an infallible work unit
    pub fn run<T, F>(&self, mut work: F) -> Result<BenchmarkResult>
    where
        F: FnMut() -> T,
    {
        self.execute(None::<fn()>, || Ok::<T, Infallible>(work()))
    }

    /// Benchmark an infallible work unit, calling `setup` once before the
    /// warm-up and once before every sample (untimed)
    pub fn run_with_setup<S, T, F>(&self, setup: S, mut work: F) -> Result<BenchmarkResult>
    where
        S: FnMut(),
        F: FnMut() -> T,
    {
        self.execute(Some(setup), || Ok::<T, Infallible>(work()))
    }

    /// Benchmark a fallible work unit
    ///
    /// The first `Err` aborts the run with [`BenchError::WorkUnitFailure`],
    /// carrying the original error as its source.
    pub fn try_run<T, E, F>(&self, work: F) -> Result<BenchmarkResult>
    where
        F: FnMut() -> std::result::Result<T, E>,
        E: Into<WorkUnitError>,
    {
        self.execute(None::<fn()>, work)
    }

    /// Fallible variant of [`run_with_setup`](Self::run_with_setup)
    pub fn try_run_with_setup<S, T, E, F>(&self, setup: S, work: F) -> Result<BenchmarkResult>
    where
        S: FnMut(),
        F: FnMut() -> std::result::Result<T, E>,
        E: Into<WorkUnitError>,
    {
        self.execute(Some(setup), work)
    }

    /// Benchmark an async work unit
    ///
    /// A current-thread tokio runtime is built before timing starts and each
    /// iteration blocks until its future completes, so execution stays
    /// sequential. Must not be called from inside another tokio runtime.
    pub fn run_async<T, F, Fut>(&self, mut work: F) -> Result<BenchmarkResult>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = T>,
    {
        self.config.validate()?;

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        self.run(|| rt.block_on(work()))
    }

    fn execute<S, T, E, F>(&self, mut setup: Option<S>, mut work: F) -> Result<BenchmarkResult>
    where
        S: FnMut(),
        F: FnMut() -> std::result::Result<T, E>,
        E: Into<WorkUnitError>,
    {
        // Fail before any side effect, including clock reads
        self.config.validate()?;
        let config = &self.config;

        debug!(
            benchmark = %config.name,
            iterations = config.iterations,
            warmup_iterations = config.warmup_iterations,
            samples = config.samples,
            "starting benchmark"
        );

        if let Some(setup) = setup.as_mut() {
            setup();
        }

        for iteration in 0..config.warmup_iterations {
            match work() {
                Ok(value) => {
                    black_box(value);
                }
                Err(e) => return Err(work_unit_failure(Phase::Warmup, iteration, e)),
            }
        }

        let mut times = Vec::with_capacity(config.samples);
        for index in 0..config.samples {
            if let Some(setup) = setup.as_mut() {
                setup();
            }

            let timer = Timer::start(&self.clock);
            for iteration in 0..config.iterations {
                match work() {
                    Ok(value) => {
                        black_box(value);
                    }
                    Err(e) => return Err(work_unit_failure(Phase::Sample(index), iteration, e)),
                }
            }
            let elapsed_ms = duration_to_ms(timer.stop(&self.clock));

            trace!(benchmark = %config.name, sample = index, elapsed_ms, "sample recorded");
            times.push(elapsed_ms);
        }

        let summary = compute_summary(&times, config.trim_policy());
        let result = BenchmarkResult::from_summary(config, &summary);

        debug!(
            benchmark = %config.name,
            mean_ms = result.mean,
            median_ms = result.median,
            trimmed = result.trimmed,
            "benchmark complete"
        );

        Ok(result)
    }
}

fn work_unit_failure<E: Into<WorkUnitError>>(phase: Phase, iteration: u64, error: E) -> BenchError {
    BenchError::WorkUnitFailure {
        phase,
        iteration,
        source: error.into(),
    }
}
