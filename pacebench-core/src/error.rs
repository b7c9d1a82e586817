//! Runner errors

use pacebench_stats::ComparisonError;
use thiserror::Error;

/// Boxed error produced by a caller-supplied work unit
pub type WorkUnitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Where in the run a work unit failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Untimed warm-up iterations
    Warmup,
    /// Timed sample with the given zero-based index
    Sample(usize),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Warmup => write!(f, "warm-up"),
            Phase::Sample(index) => write!(f, "sample {}", index),
        }
    }
}

/// Errors raised by configuration, running and comparing benchmarks
#[derive(Debug, Error)]
pub enum BenchError {
    /// A configuration value is out of range; nothing was executed
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// The baseline of a comparison has a zero, negative or NaN mean
    #[error("Invalid comparison: baseline mean must be positive, got {baseline_mean}")]
    InvalidComparison {
        /// Baseline mean that was rejected
        baseline_mean: f64,
    },

    /// The work unit returned an error; the run was aborted
    #[error("Work unit failed during {phase} (iteration {iteration}): {source}")]
    WorkUnitFailure {
        /// Phase that was executing
        phase: Phase,
        /// Zero-based iteration within the phase
        iteration: u64,
        /// Error returned by the work unit
        #[source]
        source: WorkUnitError,
    },

    /// The runtime for async work units could not be created
    #[error("Failed to build async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl BenchError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this is an `InvalidConfiguration` error
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, BenchError::InvalidConfiguration { .. })
    }

    /// Whether this is a `WorkUnitFailure`
    pub fn is_work_unit_failure(&self) -> bool {
        matches!(self, BenchError::WorkUnitFailure { .. })
    }

    /// Stable snake_case name of the variant, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            BenchError::InvalidConfiguration { .. } => "invalid_configuration",
            BenchError::InvalidComparison { .. } => "invalid_comparison",
            BenchError::WorkUnitFailure { .. } => "work_unit_failure",
            BenchError::Runtime(_) => "runtime",
        }
    }
}

impl From<ComparisonError> for BenchError {
    fn from(e: ComparisonError) -> Self {
        match e {
            ComparisonError::NonPositiveBaseline { mean } => {
                BenchError::InvalidComparison { baseline_mean: mean }
            }
        }
    }
}

/// Result alias for runner operations
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BenchError::invalid("iterations", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: iterations must be at least 1, got 0"
        );
        assert!(err.is_invalid_configuration());

        let err = BenchError::WorkUnitFailure {
            phase: Phase::Sample(2),
            iteration: 4,
            source: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "Work unit failed during sample 2 (iteration 4): boom"
        );
        assert!(err.is_work_unit_failure());
        assert_eq!(err.kind(), "work_unit_failure");
    }

    #[test]
    fn test_source_preserved() {
        let err = BenchError::WorkUnitFailure {
            phase: Phase::Warmup,
            iteration: 0,
            source: Box::new(std::io::Error::other("disk")),
        };
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_from_comparison_error() {
        let err: BenchError = ComparisonError::NonPositiveBaseline { mean: 0.0 }.into();
        assert!(matches!(err, BenchError::InvalidComparison { baseline_mean } if baseline_mean == 0.0));
    }
}
