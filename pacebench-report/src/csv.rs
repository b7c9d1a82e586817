//! CSV Output
//!
//! One row per benchmark. Failed benchmarks keep their row with empty
//! statistic columns and the failure message in `error`.

use crate::report::Report;

const HEADER: &str = "id,group,status,mean_ms,median_ms,min_ms,max_ms,std_dev_ms,\
iterations,samples,trimmed,baseline_mean_ms,change_pct,regression,error";

/// Generate a CSV document for the report's benchmark rows
pub fn generate_csv_report(report: &Report) -> String {
    let mut out = String::with_capacity(HEADER.len() + report.results.len() * 96);
    out.push_str(HEADER);
    out.push('\n');

    for entry in &report.results {
        let status = match entry.status {
            crate::BenchmarkStatus::Passed => "passed",
            crate::BenchmarkStatus::Failed => "failed",
        };
        out.push_str(&format!("{},{},{}", escape(&entry.id), escape(&entry.group), status));

        match &entry.result {
            Some(r) => {
                out.push_str(&format!(
                    ",{:.6},{:.6},{:.6},{:.6},{:.6},{},{},{}",
                    r.mean, r.median, r.min, r.max, r.std_dev, r.iterations, r.samples, r.trimmed
                ));
            }
            None => out.push_str(",,,,,,,,"),
        }

        match &entry.baseline {
            Some(b) => {
                out.push_str(&format!(
                    ",{:.6},{:.2},{}",
                    b.baseline_mean, b.comparison.percent_difference, b.is_regression
                ));
            }
            None => out.push_str(",,,"),
        }

        out.push(',');
        if let Some(failure) = &entry.failure {
            out.push_str(&escape(&failure.message));
        }
        out.push('\n');
    }

    out
}

/// Quote a field if it contains a delimiter, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{dummy_entry, dummy_meta};
    use crate::report::{BenchmarkReportResult, FailureInfo};

    #[test]
    fn test_csv_rows() {
        let failed = BenchmarkReportResult::failed(
            "broken",
            "io",
            None,
            FailureInfo {
                kind: "work_unit".to_string(),
                message: "read failed, \"disk\" gone".to_string(),
            },
        );
        let report = Report::new(dummy_meta(), vec![dummy_entry("sum", 2.0), failed], 10.0);

        let csv = generate_csv_report(&report);
        let lines: Vec<&str> = csv.lines().collect();
        let columns = HEADER.split(',').count();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("sum,default,passed,2.000000,"));
        assert_eq!(lines[1].split(',').count(), columns);
        assert_eq!(
            lines[2],
            "broken,io,failed,,,,,,,,,,,,\"read failed, \"\"disk\"\" gone\""
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
