//! Report Building
//!
//! Turns execution results into a [`Report`] and evaluates the suite's
//! pairwise comparisons against the collected results.

use super::execution::BenchExecutionResult;
use super::metadata::build_report_meta;
use crate::suite::ComparisonDef;
use pacebench_core::compare;
use pacebench_report::{BenchmarkReportResult, ComparisonEntry, FailureInfo, Report};

/// Build a complete Report from execution results
pub fn build_report(
    results: Vec<BenchExecutionResult>,
    comparisons: &[ComparisonDef],
    total_duration_ms: f64,
) -> Report {
    let entries: Vec<BenchmarkReportResult> = results
        .into_iter()
        .map(|r| match (r.outcome, r.config) {
            (Ok(result), Some(config)) => {
                BenchmarkReportResult::passed(r.benchmark_id, r.group, config, result)
            }
            (Ok(_), None) => BenchmarkReportResult::failed(
                r.benchmark_id,
                r.group,
                None,
                FailureInfo {
                    kind: "invalid_configuration".to_string(),
                    message: "completed without a resolved configuration".to_string(),
                },
            ),
            (Err(e), config) => BenchmarkReportResult::failed(
                r.benchmark_id,
                r.group,
                config,
                FailureInfo {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                },
            ),
        })
        .collect();

    let mut report = Report::new(build_report_meta(), entries, total_duration_ms);
    report.comparisons = execute_comparisons(&report, comparisons);
    report
}

/// Evaluate named comparisons against completed results
///
/// A comparison whose benchmarks are missing or failed, or whose baseline
/// mean is not positive, is kept with an error message.
pub fn execute_comparisons(
    report: &Report,
    comparisons: &[ComparisonDef],
) -> Vec<ComparisonEntry> {
    comparisons
        .iter()
        .filter(|c| report.find(&c.baseline).is_some() || report.find(&c.candidate).is_some())
        .map(|def| {
            let baseline = report.result_for(&def.baseline);
            let candidate = report.result_for(&def.candidate);
            let outcome = match (baseline, candidate) {
                (Some(baseline), Some(candidate)) => {
                    compare(baseline, candidate).map_err(|e| e.to_string())
                }
                (None, _) => Err(format!("baseline '{}' has no result", def.baseline)),
                (_, None) => Err(format!("candidate '{}' has no result", def.candidate)),
            };

            let (comparison, error) = match outcome {
                Ok(c) => (Some(c), None),
                Err(e) => (None, Some(e)),
            };

            ComparisonEntry {
                id: def.id.clone(),
                baseline: def.baseline.clone(),
                candidate: def.candidate.clone(),
                comparison,
                error,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacebench_core::{BenchError, BenchmarkConfig, BenchmarkResult};

    fn ok_result(id: &str, mean: f64) -> BenchExecutionResult {
        let config = BenchmarkConfig::new(id).iterations(100).samples(5);
        BenchExecutionResult {
            benchmark_id: id.to_string(),
            group: "default".to_string(),
            outcome: Ok(BenchmarkResult {
                name: id.to_string(),
                mean,
                median: mean,
                min: mean,
                max: mean,
                std_dev: 0.0,
                iterations: config.iterations,
                samples: config.samples,
                trimmed: 0,
            }),
            config: Some(config),
            duration_ms: mean * 5.0,
        }
    }

    fn failed_result(id: &str) -> BenchExecutionResult {
        BenchExecutionResult {
            benchmark_id: id.to_string(),
            group: "default".to_string(),
            config: None,
            outcome: Err(BenchError::InvalidConfiguration {
                field: "samples",
                reason: "must be at least 1, got 0".to_string(),
            }),
            duration_ms: 0.0,
        }
    }

    fn def(id: &str, baseline: &str, candidate: &str) -> ComparisonDef {
        ComparisonDef {
            id: id.to_string(),
            baseline: baseline.to_string(),
            candidate: candidate.to_string(),
        }
    }

    #[test]
    fn test_build_report_statuses() {
        let report = build_report(
            vec![ok_result("a", 2.0), failed_result("b")],
            &[],
            20.0,
        );

        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.failed, 1);
        let failure = report.find("b").unwrap().failure.as_ref().unwrap();
        assert_eq!(failure.kind, "invalid_configuration");
        assert!(failure.message.contains("samples"));
    }

    #[test]
    fn test_pairwise_comparisons() {
        let report = build_report(
            vec![
                ok_result("fast", 2.0),
                ok_result("slow", 5.0),
                failed_result("broken"),
            ],
            &[
                def("fast_vs_slow", "slow", "fast"),
                def("broken_vs_fast", "fast", "broken"),
                def("not_selected", "x", "y"),
            ],
            0.0,
        );

        assert_eq!(report.comparisons.len(), 2);

        let first = &report.comparisons[0];
        assert_eq!(first.comparison.as_ref().unwrap().summary, "2.50x faster");
        assert!(first.error.is_none());

        let second = &report.comparisons[1];
        assert!(second.comparison.is_none());
        assert_eq!(second.error.as_deref(), Some("candidate 'broken' has no result"));
    }

    #[test]
    fn test_zero_baseline_comparison_error() {
        let report = build_report(
            vec![ok_result("zero", 0.0), ok_result("other", 1.0)],
            &[def("cmp", "zero", "other")],
            0.0,
        );

        let entry = &report.comparisons[0];
        assert!(entry.comparison.is_none());
        assert!(entry.error.as_deref().unwrap().starts_with("Invalid comparison"));
    }
}
