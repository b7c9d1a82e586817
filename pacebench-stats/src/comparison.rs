//! Mean Comparison
//!
//! Compares a candidate mean against a baseline mean. The ratio is
//! `candidate / baseline`, so values above 1 mean the candidate is slower.
//! The printed multiplier is always >= 1 and oriented toward whichever
//! direction the change went ("2.00x slower", never "0.50x slower").

use serde::{Deserialize, Serialize};

/// Decimal places used for the comparison summary
pub const SUMMARY_PRECISION: usize = 2;

/// Which way the candidate moved relative to the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Candidate took no more time than the baseline (`ratio <= 1`)
    Faster,
    /// Candidate took longer than the baseline (`ratio > 1`)
    Slower,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Faster => write!(f, "faster"),
            Direction::Slower => write!(f, "slower"),
        }
    }
}

/// Result of comparing two means
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// `candidate / baseline`
    pub ratio: f64,
    /// `(candidate - baseline) / baseline * 100`
    pub percent_difference: f64,
    /// Qualitative direction of the change
    pub direction: Direction,
    /// Multiplier shown in the summary (`ratio` or `1 / ratio`, always >= 1).
    /// `None` when it is not finite (zero candidate mean).
    pub multiplier: Option<f64>,
    /// Human-readable summary, e.g. `"1.53x slower"`
    pub summary: String,
}

impl ComparisonResult {
    /// Whether the absolute percent change is at least `threshold_pct`
    pub fn exceeds(&self, threshold_pct: f64) -> bool {
        self.percent_difference.abs() >= threshold_pct
    }

    /// Slower by at least `threshold_pct` percent
    pub fn is_regression(&self, threshold_pct: f64) -> bool {
        self.direction == Direction::Slower && self.exceeds(threshold_pct)
    }

    /// Faster by at least `threshold_pct` percent
    pub fn is_improvement(&self, threshold_pct: f64) -> bool {
        self.direction == Direction::Faster && self.exceeds(threshold_pct)
    }
}

impl std::fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary)
    }
}

/// Compare a candidate mean against a baseline mean
///
/// Equal means fall on the "faster" side of the boundary: `"1.00x faster"`.
///
/// # Examples
///
/// ```
/// # use pacebench_stats::compare_means;
/// let cmp = compare_means(10.0, 25.0).unwrap();
/// assert_eq!(cmp.summary, "2.50x slower");
///
/// let cmp = compare_means(10.0, 5.0).unwrap();
/// assert_eq!(cmp.summary, "2.00x faster");
/// ```
pub fn compare_means(baseline: f64, candidate: f64) -> Result<ComparisonResult, ComparisonError> {
    if baseline.is_nan() || baseline <= 0.0 {
        return Err(ComparisonError::NonPositiveBaseline { mean: baseline });
    }

    let ratio = candidate / baseline;
    let percent_difference = (candidate - baseline) / baseline * 100.0;

    let (direction, multiplier) = if ratio > 1.0 {
        (Direction::Slower, ratio)
    } else {
        (Direction::Faster, 1.0 / ratio)
    };

    Ok(ComparisonResult {
        ratio,
        percent_difference,
        direction,
        multiplier: multiplier.is_finite().then_some(multiplier),
        summary: format!(
            "{:.prec$}x {}",
            multiplier,
            direction,
            prec = SUMMARY_PRECISION
        ),
    })
}

/// Errors from comparison operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComparisonError {
    #[error("Baseline mean must be positive, got {mean}")]
    NonPositiveBaseline { mean: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_identical() {
        let result = compare_means(12.5, 12.5).unwrap();

        assert!((result.ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.direction, Direction::Faster);
        assert_eq!(result.summary, "1.00x faster");
        assert!((result.percent_difference - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compare_slower() {
        let result = compare_means(10.0, 15.0).unwrap();

        assert!((result.ratio - 1.5).abs() < 1e-12);
        assert!((result.percent_difference - 50.0).abs() < 1e-9);
        assert_eq!(result.direction, Direction::Slower);
        assert_eq!(result.summary, "1.50x slower");
        assert!(result.is_regression(5.0));
        assert!(!result.is_improvement(5.0));
    }

    #[test]
    fn test_compare_faster() {
        let result = compare_means(10.0, 4.0).unwrap();

        assert!((result.ratio - 0.4).abs() < 1e-12);
        assert!((result.percent_difference + 60.0).abs() < 1e-9);
        assert_eq!(result.summary, "2.50x faster");
        assert!((result.multiplier.unwrap() - 2.5).abs() < 1e-12);
        assert!(result.is_improvement(5.0));
    }

    #[test]
    fn test_inverse_ratio() {
        let ab = compare_means(3.0, 7.0).unwrap();
        let ba = compare_means(7.0, 3.0).unwrap();

        assert!((ba.ratio - 1.0 / ab.ratio).abs() < 1e-12);
        assert_eq!(ab.direction, Direction::Slower);
        assert_eq!(ba.direction, Direction::Faster);
        assert_eq!(ab.summary, "2.33x slower");
        assert_eq!(ba.summary, "2.33x faster");
    }

    #[test]
    fn test_threshold_below() {
        let result = compare_means(100.0, 103.0).unwrap();
        assert!(!result.is_regression(5.0));
        assert!(result.exceeds(3.0));
    }

    #[test]
    fn test_zero_candidate() {
        let result = compare_means(10.0, 0.0).unwrap();
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.multiplier, None);
        assert_eq!(result.summary, "infx faster");
    }

    #[test]
    fn test_zero_candidate_json_round_trip() {
        let result = compare_means(10.0, 0.0).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_invalid_baseline() {
        assert_eq!(
            compare_means(0.0, 1.0),
            Err(ComparisonError::NonPositiveBaseline { mean: 0.0 })
        );
        assert!(compare_means(-1.0, 1.0).is_err());
        assert!(compare_means(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::Slower).unwrap();
        assert_eq!(json, "\"slower\"");
    }
}
