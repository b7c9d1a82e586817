//! Report Data Structures

use chrono::{DateTime, Utc};
use pacebench_core::{BenchmarkConfig, BenchmarkResult};
use pacebench_stats::ComparisonResult;
use serde::{Deserialize, Serialize};

/// Current report schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub results: Vec<BenchmarkReportResult>,
    /// Named pairwise comparisons declared by the suite
    #[serde(default)]
    pub comparisons: Vec<ComparisonEntry>,
    pub summary: ReportSummary,
    /// Metadata of the baseline report this run was compared against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_meta: Option<ReportMeta>,
}

impl Report {
    /// Create a report and derive its summary from the results
    pub fn new(
        meta: ReportMeta,
        results: Vec<BenchmarkReportResult>,
        total_duration_ms: f64,
    ) -> Self {
        let summary = ReportSummary::from_results(&results, total_duration_ms);
        Self {
            meta,
            results,
            comparisons: Vec::new(),
            summary,
            baseline_meta: None,
        }
    }

    /// Look up a benchmark by id
    pub fn find(&self, id: &str) -> Option<&BenchmarkReportResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Completed result for a benchmark id, if it passed
    pub fn result_for(&self, id: &str) -> Option<&BenchmarkResult> {
        self.find(id).and_then(|r| r.result.as_ref())
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub git_commit: Option<String>,
    pub git_branch: Option<String>,
    pub system: SystemInfo,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: u32,
}

/// Individual benchmark entry in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReportResult {
    pub id: String,
    pub group: String,
    pub status: BenchmarkStatus,
    /// Resolved configuration the benchmark ran with (absent when it was invalid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BenchmarkConfig>,
    pub result: Option<BenchmarkResult>,
    /// Comparison against the same benchmark in a baseline report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineComparison>,
    pub failure: Option<FailureInfo>,
}

impl BenchmarkReportResult {
    /// Entry for a benchmark that completed
    pub fn passed(
        id: impl Into<String>,
        group: impl Into<String>,
        config: BenchmarkConfig,
        result: BenchmarkResult,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            status: BenchmarkStatus::Passed,
            config: Some(config),
            result: Some(result),
            baseline: None,
            failure: None,
        }
    }

    /// Entry for a benchmark that returned an error
    pub fn failed(
        id: impl Into<String>,
        group: impl Into<String>,
        config: Option<BenchmarkConfig>,
        failure: FailureInfo,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            status: BenchmarkStatus::Failed,
            config,
            result: None,
            baseline: None,
            failure: Some(failure),
        }
    }
}

/// Benchmark execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkStatus {
    Passed,
    Failed,
}

/// Current result compared against a stored baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineComparison {
    pub baseline_mean: f64,
    pub comparison: ComparisonResult,
    /// Threshold (percent) the classification used
    pub threshold: f64,
    pub is_regression: bool,
    pub is_improvement: bool,
}

/// Named pairwise comparison between two benchmarks of the same run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub id: String,
    pub baseline: String,
    pub candidate: String,
    pub comparison: Option<ComparisonResult>,
    /// Why no comparison could be made (missing or failed benchmark, zero baseline)
    pub error: Option<String>,
}

/// Failure information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureInfo {
    pub kind: String,
    pub message: String,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_benchmarks: usize,
    pub passed: usize,
    pub failed: usize,
    pub regressions: usize,
    pub improvements: usize,
    pub total_duration_ms: f64,
}

impl ReportSummary {
    /// Tally statuses and baseline classifications
    pub fn from_results(results: &[BenchmarkReportResult], total_duration_ms: f64) -> Self {
        let mut summary = ReportSummary {
            total_benchmarks: results.len(),
            total_duration_ms,
            ..Default::default()
        };

        for r in results {
            match r.status {
                BenchmarkStatus::Passed => summary.passed += 1,
                BenchmarkStatus::Failed => summary.failed += 1,
            }
            if let Some(baseline) = &r.baseline {
                if baseline.is_regression {
                    summary.regressions += 1;
                } else if baseline.is_improvement {
                    summary.improvements += 1;
                }
            }
        }

        summary
    }
}
