#![warn(missing_docs)]
//! PaceBench Statistical Engine
//!
//! Deliberately small descriptive statistics for benchmark samples:
//! - Symmetric outlier trimming (10% from each end by default)
//! - Trimmed mean, median, min, max and standard deviation
//! - Linear-interpolation median
//! - Mean-vs-mean comparison with a direction-oriented multiplier

mod comparison;
mod percentiles;
mod summary;
mod trim;

pub use comparison::{
    ComparisonError, ComparisonResult, Direction, SUMMARY_PRECISION, compare_means,
};
pub use percentiles::median_of_sorted;
pub use summary::{SummaryStatistics, compute_summary};
pub use trim::{DEFAULT_TRIM_FRACTION, TrimPolicy, TrimmedSamples, trim_samples};

/// Default decimal places for reported durations
pub const DEFAULT_PRECISION: usize = 2;
