#![warn(missing_docs)]
//! PaceBench Report - Reporting and Output Formats
//!
//! Renders benchmark results in several formats:
//! - Human (fixed-layout terminal text)
//! - JSON (machine-readable, also used for stored baselines)
//! - CSV (spreadsheet-compatible)

mod csv;
mod json;
mod report;
mod text;

pub use csv::generate_csv_report;
pub use json::{ReportParseError, generate_json_report, parse_json_report};
pub use report::{
    BaselineComparison, BenchmarkReportResult, BenchmarkStatus, ComparisonEntry, FailureInfo,
    Report, ReportMeta, ReportSummary, SCHEMA_VERSION, SystemInfo,
};
pub use text::{
    format_comparison, format_duration, format_human_output, format_results,
    format_results_with_precision, group_thousands,
};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl OutputFormat {
    /// Render a report in this format
    pub fn render(self, report: &Report) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Human => Ok(format_human_output(report)),
            OutputFormat::Json => generate_json_report(report),
            OutputFormat::Csv => Ok(generate_csv_report(report)),
        }
    }

    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Human => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
