//! Human-Readable Output
//!
//! Fixed-layout text for single results and terminal reports. Durations are
//! milliseconds rounded to [`DEFAULT_PRECISION`] decimal places; counts use
//! thousands separators.

use crate::report::{BenchmarkReportResult, BenchmarkStatus, Report};
use pacebench_core::BenchmarkResult;
use pacebench_stats::{ComparisonResult, DEFAULT_PRECISION};

/// Insert `,` between groups of three digits
///
/// # Examples
///
/// ```
/// # use pacebench_report::group_thousands;
/// assert_eq!(group_thousands(1_000_000), "1,000,000");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a millisecond value with an automatically chosen unit
pub fn format_duration(ms: f64) -> String {
    let abs = ms.abs();
    if abs >= 1000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else if abs >= 1.0 || abs == 0.0 {
        format!("{:.2}ms", ms)
    } else if abs >= 0.001 {
        format!("{:.2}µs", ms * 1_000.0)
    } else {
        format!("{:.2}ns", ms * 1_000_000.0)
    }
}

/// Six-line report for a single result (2 decimal places)
///
/// ```text
///   Mean: 12.34ms
///   Median: 12.10ms
///   Min: 11.80ms
///   Max: 13.02ms
///   Iterations: 1,000,000
///   Samples: 10
/// ```
pub fn format_results(result: &BenchmarkResult) -> String {
    format_results_with_precision(result, DEFAULT_PRECISION)
}

/// [`format_results`] with a custom number of decimal places
pub fn format_results_with_precision(result: &BenchmarkResult, precision: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Mean: {:.p$}ms\n", result.mean, p = precision));
    out.push_str(&format!("  Median: {:.p$}ms\n", result.median, p = precision));
    out.push_str(&format!("  Min: {:.p$}ms\n", result.min, p = precision));
    out.push_str(&format!("  Max: {:.p$}ms\n", result.max, p = precision));
    out.push_str(&format!("  Iterations: {}\n", group_thousands(result.iterations)));
    out.push_str(&format!("  Samples: {}\n", group_thousands(result.samples as u64)));
    out
}

/// One-line comparison, e.g. `  fast vs slow: 2.50x faster (-60.00%)`
pub fn format_comparison(
    baseline: &BenchmarkResult,
    candidate: &BenchmarkResult,
    comparison: &ComparisonResult,
) -> String {
    format!(
        "  {} vs {}: {} ({:+.2}%)\n",
        candidate.name, baseline.name, comparison.summary, comparison.percent_difference
    )
}

/// Format a report for terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("PaceBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let mut groups: std::collections::BTreeMap<&str, Vec<&BenchmarkReportResult>> =
        std::collections::BTreeMap::new();
    for result in &report.results {
        groups.entry(result.group.as_str()).or_default().push(result);
    }

    for (group, results) in groups {
        output.push_str(&format!("Group: {}\n", group));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for entry in results {
            let status_icon = match entry.status {
                BenchmarkStatus::Passed => "✓",
                BenchmarkStatus::Failed => "✗",
            };
            output.push_str(&format!("{} {}\n", status_icon, entry.id));

            if let Some(result) = &entry.result {
                output.push_str(&format_results(result));
                output.push_str(&format!(
                    "  Per iteration: {}\n",
                    format_duration(result.mean_per_iteration_ms())
                ));
                if let Some(ops) = result.ops_per_sec() {
                    output.push_str(&format!("  Throughput: {:.2} ops/sec\n", ops));
                }
            }

            if let Some(baseline) = &entry.baseline {
                let marker = if baseline.is_regression {
                    " REGRESSION"
                } else if baseline.is_improvement {
                    " improvement"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "  Baseline: {} -> {} ({}, {:+.2}%){}\n",
                    format_duration(baseline.baseline_mean),
                    entry
                        .result
                        .as_ref()
                        .map(|r| format_duration(r.mean))
                        .unwrap_or_default(),
                    baseline.comparison.summary,
                    baseline.comparison.percent_difference,
                    marker
                ));
            }

            if let Some(failure) = &entry.failure {
                output.push_str(&format!("  error: {}\n", failure.message));
            }

            output.push('\n');
        }
    }

    if !report.comparisons.is_empty() {
        output.push_str("Comparisons\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for cmp in &report.comparisons {
            match (&cmp.comparison, &cmp.error) {
                (Some(c), _) => output.push_str(&format!(
                    "  {}: {} vs {}: {} ({:+.2}%)\n",
                    cmp.id, cmp.candidate, cmp.baseline, c.summary, c.percent_difference
                )),
                (None, Some(err)) => output.push_str(&format!("  {}: {}\n", cmp.id, err)),
                (None, None) => {}
            }
        }
        output.push('\n');
    }

    output.push_str("Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Total: {}  Passed: {}  Failed: {}\n",
        report.summary.total_benchmarks, report.summary.passed, report.summary.failed
    ));
    if report.baseline_meta.is_some() {
        output.push_str(&format!(
            "  Regressions: {}  Improvements: {}\n",
            report.summary.regressions, report.summary.improvements
        ));
    }
    output.push_str(&format!(
        "  Duration: {}\n",
        format_duration(report.summary.total_duration_ms)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{dummy_entry, dummy_meta, dummy_result};
    use crate::report::{ComparisonEntry, Report};
    use pacebench_stats::compare_means;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(12), "12");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
    }

    #[test]
    fn test_format_results_layout() {
        let result = BenchmarkResult {
            name: "noop".to_string(),
            mean: 12.3449,
            median: 12.1,
            min: 11.8,
            max: 13.015,
            std_dev: 0.4,
            iterations: 1_000_000,
            samples: 10,
            trimmed: 2,
        };

        let text = format_results(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  Mean: 12.34ms",
                "  Median: 12.10ms",
                "  Min: 11.80ms",
                "  Max: 13.02ms",
                "  Iterations: 1,000,000",
                "  Samples: 10",
            ]
        );
    }

    #[test]
    fn test_format_results_precision() {
        let text = format_results_with_precision(&dummy_result("p", 1.0), 4);
        assert!(text.contains("  Mean: 1.0000ms"));
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(1500.0), "1.50s");
        assert_eq!(format_duration(12.345), "12.35ms");
        assert_eq!(format_duration(0.25), "250.00µs");
        assert_eq!(format_duration(0.000_05), "50.00ns");
        assert_eq!(format_duration(0.0), "0.00ms");
    }

    #[test]
    fn test_format_comparison() {
        let baseline = dummy_result("slow", 10.0);
        let candidate = dummy_result("fast", 4.0);
        let cmp = compare_means(baseline.mean, candidate.mean).unwrap();

        assert_eq!(
            format_comparison(&baseline, &candidate, &cmp),
            "  fast vs slow: 2.50x faster (-60.00%)\n"
        );
    }

    #[test]
    fn test_human_output_sections() {
        let mut report = Report::new(
            dummy_meta(),
            vec![dummy_entry("alpha", 2.0), dummy_entry("beta", 3.0)],
            250.0,
        );
        report.comparisons.push(ComparisonEntry {
            id: "alpha_vs_beta".to_string(),
            baseline: "alpha".to_string(),
            candidate: "beta".to_string(),
            comparison: compare_means(2.0, 3.0).ok(),
            error: None,
        });

        let text = format_human_output(&report);
        assert!(text.contains("Group: default"));
        assert!(text.contains("✓ alpha"));
        assert!(text.contains("  Mean: 2.00ms"));
        assert!(text.contains("alpha_vs_beta: beta vs alpha: 1.50x slower (+50.00%)"));
        assert!(text.contains("Total: 2  Passed: 2  Failed: 0"));
        assert!(!text.contains("Regressions"));
    }
}
