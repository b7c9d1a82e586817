//! Benchmark results and pairwise comparison

use crate::config::BenchmarkConfig;
use crate::error::Result;
use pacebench_stats::{ComparisonResult, SummaryStatistics, compare_means};
use serde::{Deserialize, Serialize};

/// Outcome of one completed run. Durations are per sample, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Display label
    pub name: String,
    /// Trimmed mean sample duration (ms)
    pub mean: f64,
    /// Median of the trimmed samples (ms)
    pub median: f64,
    /// Fastest retained sample (ms)
    pub min: f64,
    /// Slowest retained sample (ms)
    pub max: f64,
    /// Standard deviation of the retained samples (ms)
    pub std_dev: f64,
    /// Work-unit executions per sample
    pub iterations: u64,
    /// Samples collected
    pub samples: usize,
    /// Samples discarded by trimming (both ends together)
    pub trimmed: usize,
}

impl BenchmarkResult {
    /// Build a result from a summary of sample durations
    pub fn from_summary(config: &BenchmarkConfig, summary: &SummaryStatistics) -> Self {
        Self {
            name: config.name.clone(),
            mean: summary.mean,
            median: summary.median,
            min: summary.min,
            max: summary.max,
            std_dev: summary.std_dev,
            iterations: config.iterations,
            samples: config.samples,
            trimmed: summary.trimmed_count,
        }
    }

    /// Mean time of a single work-unit execution (ms)
    pub fn mean_per_iteration_ms(&self) -> f64 {
        self.mean / self.iterations as f64
    }

    /// Work-unit executions per second at the mean sample duration
    pub fn ops_per_sec(&self) -> Option<f64> {
        if self.mean > 0.0 {
            Some(self.iterations as f64 / (self.mean / 1000.0))
        } else {
            None
        }
    }
}

/// Compare a candidate result against a baseline result
///
/// Fails with `InvalidComparison` when the baseline mean is not positive.
pub fn compare(baseline: &BenchmarkResult, candidate: &BenchmarkResult) -> Result<ComparisonResult> {
    Ok(compare_means(baseline.mean, candidate.mean)?)
}
