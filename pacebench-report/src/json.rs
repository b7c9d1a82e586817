//! JSON Output

use crate::report::{Report, SCHEMA_VERSION};
use thiserror::Error;

/// Errors reading a stored report
#[derive(Debug, Error)]
pub enum ReportParseError {
    /// Input is not a valid report document
    #[error("invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Report was written by an incompatible schema
    #[error("unsupported report schema version {found} (expected {expected})")]
    SchemaVersion {
        /// Version found in the document
        found: u32,
        /// Version this build reads
        expected: u32,
    },
}

/// Generate a prettified JSON report.
///
/// Serializes the benchmark report into machine-readable JSON format.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Parse a report previously written by [`generate_json_report`]
pub fn parse_json_report(json: &str) -> Result<Report, ReportParseError> {
    let report: Report = serde_json::from_str(json)?;
    if report.meta.schema_version != SCHEMA_VERSION {
        return Err(ReportParseError::SchemaVersion {
            found: report.meta.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{dummy_entry, dummy_meta};
    use crate::report::{BaselineComparison, ComparisonEntry};
    use pacebench_stats::compare_means;

    #[test]
    fn test_json_preserves_results() {
        let report = Report::new(dummy_meta(), vec![dummy_entry("sum", 4.25)], 40.0);

        let json = generate_json_report(&report).unwrap();
        assert!(json.contains("\"schema_version\": 1"));
        assert!(json.contains("\"status\": \"passed\""));
        assert!(!json.contains("baseline_meta"));

        let parsed = parse_json_report(&json).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.result_for("sum"), report.result_for("sum"));
        assert_eq!(parsed.summary.passed, 1);
    }

    #[test]
    fn test_zero_candidate_comparison_survives_reload() {
        let zero_mean = compare_means(10.0, 0.0).unwrap();

        let mut entry = dummy_entry("instant", 0.0);
        entry.baseline = Some(BaselineComparison {
            baseline_mean: 10.0,
            comparison: zero_mean.clone(),
            threshold: 5.0,
            is_regression: false,
            is_improvement: true,
        });
        let mut report = Report::new(dummy_meta(), vec![entry, dummy_entry("slow", 10.0)], 1.0);
        report.comparisons.push(ComparisonEntry {
            id: "instant_vs_slow".to_string(),
            baseline: "slow".to_string(),
            candidate: "instant".to_string(),
            comparison: Some(zero_mean.clone()),
            error: None,
        });

        let json = generate_json_report(&report).unwrap();
        let parsed = parse_json_report(&json).unwrap();

        assert_eq!(parsed.comparisons[0].comparison.as_ref(), Some(&zero_mean));
        let baseline = parsed.results[0].baseline.as_ref().unwrap();
        assert_eq!(baseline.comparison.summary, "infx faster");
        assert_eq!(baseline.comparison.multiplier, None);
    }

    #[test]
    fn test_rejects_other_schema_version() {
        let mut meta = dummy_meta();
        meta.schema_version = 99;
        let json = generate_json_report(&Report::new(meta, vec![], 0.0)).unwrap();

        let err = parse_json_report(&json).unwrap_err();
        assert!(matches!(err, ReportParseError::SchemaVersion { found: 99, .. }));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_json_report("{ not json"),
            Err(ReportParseError::Json(_))
        ));
    }
}
