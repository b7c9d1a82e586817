//! Baseline Storage and Regression Detection
//!
//! A baseline is a JSON report saved by an earlier run. Each current result
//! is compared with the baseline result of the same id; changes whose
//! magnitude reaches the threshold count as regressions or improvements.

use anyhow::Context;
use pacebench_report::{
    BaselineComparison, Report, ReportSummary, generate_json_report, parse_json_report,
};
use pacebench_stats::compare_means;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Load a baseline report from disk
pub fn load_baseline(path: &Path) -> anyhow::Result<Report> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read baseline {}", path.display()))?;
    let report = parse_json_report(&json)
        .with_context(|| format!("failed to parse baseline {}", path.display()))?;
    debug!(path = %path.display(), benchmarks = report.results.len(), "baseline loaded");
    Ok(report)
}

/// Write a report as baseline JSON, creating parent directories
pub fn save_baseline(path: &Path, report: &Report) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = generate_json_report(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write baseline {}", path.display()))?;
    info!(path = %path.display(), "baseline saved");
    Ok(())
}

/// Apply baseline comparison data to the report.
///
/// Benchmarks without a completed counterpart in the baseline, or whose
/// baseline mean is not positive, are left without a comparison. The
/// report summary is recomputed afterwards.
pub fn apply_baseline_comparison(
    report: &mut Report,
    baseline: &Report,
    regression_threshold: f64,
) {
    report.baseline_meta = Some(baseline.meta.clone());

    let baseline_means: HashMap<&str, f64> = baseline
        .results
        .iter()
        .filter_map(|r| r.result.as_ref().map(|res| (r.id.as_str(), res.mean)))
        .collect();

    for entry in &mut report.results {
        let (Some(current), Some(&baseline_mean)) =
            (&entry.result, baseline_means.get(entry.id.as_str()))
        else {
            continue;
        };

        match compare_means(baseline_mean, current.mean) {
            Ok(comparison) => {
                entry.baseline = Some(BaselineComparison {
                    baseline_mean,
                    is_regression: comparison.is_regression(regression_threshold),
                    is_improvement: comparison.is_improvement(regression_threshold),
                    threshold: regression_threshold,
                    comparison,
                });
            }
            Err(e) => debug!(benchmark = %entry.id, error = %e, "skipping baseline comparison"),
        }
    }

    let total_duration_ms = report.summary.total_duration_ms;
    report.summary = ReportSummary::from_results(&report.results, total_duration_ms);
}
