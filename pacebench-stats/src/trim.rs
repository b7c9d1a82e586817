//! Outlier Trimming
//!
//! Symmetric trimming: a fixed fraction of the sorted samples is discarded from
//! each end before central tendency is computed. Protects the mean from one-off
//! pauses (slow tail) as well as from unusually lucky samples (fast tail).
//!
//! The trim count is clamped so that at least one sample always survives:
//! `min(floor(n * fraction), floor((n - 1) / 2))`.

use serde::{Deserialize, Serialize};

/// Default fraction trimmed from each end of the sorted samples
pub const DEFAULT_TRIM_FRACTION: f64 = 0.10;

/// How many samples to discard from each end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimPolicy {
    /// Fraction in `[0.0, 0.5)` removed from each end
    pub fraction: f64,
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_TRIM_FRACTION,
        }
    }
}

impl TrimPolicy {
    /// Policy that keeps every sample
    pub const NONE: TrimPolicy = TrimPolicy { fraction: 0.0 };

    /// Create a policy with the given per-side fraction
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// Whether the fraction can be applied (finite, `0.0 <= f < 0.5`)
    pub fn is_valid(&self) -> bool {
        self.fraction.is_finite() && (0.0..0.5).contains(&self.fraction)
    }

    /// Number of samples removed from EACH end for `n` samples
    pub fn trim_count(&self, n: usize) -> usize {
        if n == 0 || !self.is_valid() {
            return 0;
        }
        let requested = (n as f64 * self.fraction).floor() as usize;
        requested.min((n - 1) / 2)
    }
}

/// Result of trimming a sample set
#[derive(Debug, Clone)]
pub struct TrimmedSamples {
    /// All samples, sorted ascending
    pub sorted: Vec<f64>,
    /// Samples removed from each end
    pub trim_count: usize,
}

impl TrimmedSamples {
    /// The retained (middle) slice of the sorted samples
    pub fn kept(&self) -> &[f64] {
        &self.sorted[self.trim_count..self.sorted.len() - self.trim_count]
    }

    /// Total number of discarded samples (both ends)
    pub fn removed(&self) -> usize {
        self.trim_count * 2
    }
}

/// Sort samples and apply the trim policy
///
/// # Examples
///
/// ```
/// # use pacebench_stats::{TrimPolicy, trim_samples};
/// let samples: Vec<f64> = (1..=10).map(|x| x as f64 * 10.0).collect();
/// let trimmed = trim_samples(&samples, TrimPolicy::default());
/// assert_eq!(trimmed.kept(), &[20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
/// ```
pub fn trim_samples(samples: &[f64], policy: TrimPolicy) -> TrimmedSamples {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    TrimmedSamples {
        trim_count: policy.trim_count(sorted.len()),
        sorted,
    }
}
