//! Summary Statistics
//!
//! Every statistic (mean, median, min, max, stddev) is computed from the
//! TRIMMED sample set, so `min <= median <= max` and `min <= mean <= max`
//! hold whenever at least one sample was collected.

use crate::percentiles::median_of_sorted;
use crate::trim::{TrimPolicy, trim_samples};
use serde::{Deserialize, Serialize};

/// Summary of a trimmed sample set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean of the retained samples
    pub mean: f64,
    /// Median of the retained samples
    pub median: f64,
    /// Smallest retained sample
    pub min: f64,
    /// Largest retained sample
    pub max: f64,
    /// Sample standard deviation (n - 1) of the retained samples
    pub std_dev: f64,

    /// Samples collected before trimming
    pub sample_count: usize,
    /// Samples discarded in total (both ends)
    pub trimmed_count: usize,
}

impl SummaryStatistics {
    /// Summary of an empty sample set (all zeros)
    pub fn empty() -> Self {
        Self {
            mean: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
            std_dev: 0.0,
            sample_count: 0,
            trimmed_count: 0,
        }
    }

    /// Samples that contributed to the statistics
    pub fn retained_count(&self) -> usize {
        self.sample_count - self.trimmed_count
    }
}

/// Trim the samples with `policy` and summarize what remains
pub fn compute_summary(samples: &[f64], policy: TrimPolicy) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::empty();
    }

    let trimmed = trim_samples(samples, policy);
    let kept = trimmed.kept();
    let n = kept.len();

    let mean = kept.iter().sum::<f64>() / n as f64;
    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = kept.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    // Floating point summation can drift a hair outside [min, max] for
    // near-identical samples.
    let min = kept[0];
    let max = kept[n - 1];

    SummaryStatistics {
        mean: mean.clamp(min, max),
        median: median_of_sorted(kept),
        min,
        max,
        std_dev,
        sample_count: samples.len(),
        trimmed_count: trimmed.removed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = compute_summary(&samples, TrimPolicy::NONE);

        assert!((summary.mean - 3.0).abs() < 1e-9);
        assert!((summary.median - 3.0).abs() < 1e-9);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.sample_count, 5);
        assert_eq!(summary.trimmed_count, 0);
    }

    #[test]
    fn test_trimmed_hand_computed() {
        // 10 samples, 10% trimmed from each side -> 20..=90 remain
        let samples = vec![100.0, 10.0, 50.0, 20.0, 90.0, 30.0, 80.0, 40.0, 70.0, 60.0];
        let summary = compute_summary(&samples, TrimPolicy::default());

        assert!((summary.mean - 55.0).abs() < 1e-9);
        assert!((summary.median - 55.0).abs() < 1e-9);
        assert_eq!(summary.min, 20.0);
        assert_eq!(summary.max, 90.0);
        assert_eq!(summary.trimmed_count, 2);
        assert_eq!(summary.retained_count(), 8);
    }

    #[test]
    fn test_outlier_trimmed_away() {
        let samples = vec![10.0, 10.5, 9.5, 10.2, 9.8, 10.1, 9.9, 10.0, 10.3, 250.0];
        let summary = compute_summary(&samples, TrimPolicy::default());

        assert!(summary.mean < 11.0);
        assert!(summary.max < 11.0);
    }

    #[test]
    fn test_ordering_invariants() {
        let samples = vec![3.3, 0.7, 12.0, 5.5, 5.5, 1.2, 8.9];
        let summary = compute_summary(&samples, TrimPolicy::new(0.2));

        assert!(summary.min <= summary.median && summary.median <= summary.max);
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    }

    #[test]
    fn test_identical_samples() {
        let samples = vec![0.1; 7];
        let summary = compute_summary(&samples, TrimPolicy::default());

        assert_eq!(summary.min, 0.1);
        assert_eq!(summary.max, 0.1);
        assert!(summary.mean >= summary.min && summary.mean <= summary.max);
        assert!(summary.std_dev < 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let summary = compute_summary(&[7.0], TrimPolicy::new(0.4));

        assert_eq!(summary.mean, 7.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.retained_count(), 1);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[], TrimPolicy::default());

        assert_eq!(summary.sample_count, 0);
        assert!((summary.mean - 0.0).abs() < f64::EPSILON);
    }
}
