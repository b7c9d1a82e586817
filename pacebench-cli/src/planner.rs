//! Benchmark Planner
//!
//! Builds execution plan by filtering and ordering benchmarks.
//!
//! Filtering options:
//! - Regex pattern matching on benchmark ID
//! - Group filtering
//! - Tag inclusion/exclusion
//!
//! Ordering: Benchmarks are sorted alphabetically by ID for deterministic execution.

use crate::suite::BenchmarkDef;
use std::ops::Deref;

/// Execution plan for benchmarks
pub struct ExecutionPlan<B> {
    /// Ordered list of benchmarks to run
    pub benchmarks: Vec<B>,
}

/// Selection criteria for a plan
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanFilter<'a> {
    /// Regex matched against the benchmark ID
    pub pattern: Option<&'a regex::Regex>,
    /// Only this group
    pub group: Option<&'a str>,
    /// Only benchmarks with this tag
    pub tag: Option<&'a str>,
    /// Skip benchmarks with this tag
    pub skip_tag: Option<&'a str>,
}

impl PlanFilter<'_> {
    /// Whether `bench` passes every criterion
    pub fn matches(&self, bench: &BenchmarkDef) -> bool {
        if let Some(re) = self.pattern {
            if !re.is_match(&bench.id) {
                return false;
            }
        }

        if let Some(g) = self.group {
            if bench.group != g {
                return false;
            }
        }

        if let Some(t) = self.tag {
            if !bench.has_tag(t) {
                return false;
            }
        }

        if let Some(st) = self.skip_tag {
            if bench.has_tag(st) {
                return false;
            }
        }

        true
    }
}

/// Build execution plan from registered benchmarks
///
/// Works over shared or mutable references so the same selection serves
/// listing and execution.
pub fn build_plan<B>(
    benchmarks: impl IntoIterator<Item = B>,
    filter: &PlanFilter<'_>,
) -> ExecutionPlan<B>
where
    B: Deref<Target = BenchmarkDef>,
{
    let mut selected: Vec<B> = benchmarks
        .into_iter()
        .filter(|b| filter.matches(b))
        .collect();

    selected.sort_by(|a, b| a.id.cmp(&b.id));

    ExecutionPlan {
        benchmarks: selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::Suite;

    fn make_suite(benches: &[(&str, &str, &[&str])]) -> Suite {
        let mut suite = Suite::new();
        for (id, group, tags) in benches {
            suite
                .bench(*id, |r| r.run(|| ()))
                .group(*group)
                .tags(tags.iter().copied());
        }
        suite
    }

    fn ids<B: Deref<Target = BenchmarkDef>>(plan: &ExecutionPlan<B>) -> Vec<&str> {
        plan.benchmarks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_no_filter() {
        let suite = make_suite(&[
            ("c_bench", "default", &[]),
            ("a_bench", "default", &[]),
            ("b_bench", "default", &[]),
        ]);

        let plan = build_plan(suite.benchmarks(), &PlanFilter::default());

        // Should be sorted alphabetically
        assert_eq!(ids(&plan), vec!["a_bench", "b_bench", "c_bench"]);
    }

    #[test]
    fn test_regex_filter() {
        let suite = make_suite(&[
            ("parse_json", "default", &[]),
            ("parse_toml", "default", &[]),
            ("render", "default", &[]),
        ]);
        let re = regex::Regex::new("^parse_").unwrap();
        let filter = PlanFilter {
            pattern: Some(&re),
            ..Default::default()
        };

        let plan = build_plan(suite.benchmarks(), &filter);
        assert_eq!(ids(&plan), vec!["parse_json", "parse_toml"]);
    }

    #[test]
    fn test_group_filter() {
        let suite = make_suite(&[
            ("bench1", "group_a", &[]),
            ("bench2", "group_b", &[]),
            ("bench3", "group_a", &[]),
        ]);
        let filter = PlanFilter {
            group: Some("group_a"),
            ..Default::default()
        };

        let plan = build_plan(suite.benchmarks(), &filter);

        assert_eq!(plan.benchmarks.len(), 2);
        assert!(plan.benchmarks.iter().all(|b| b.group == "group_a"));
    }

    #[test]
    fn test_tag_filter() {
        let suite = make_suite(&[
            ("bench1", "default", &["fast"]),
            ("bench2", "default", &["slow"]),
            ("bench3", "default", &["fast", "important"]),
        ]);
        let filter = PlanFilter {
            tag: Some("fast"),
            ..Default::default()
        };

        let plan = build_plan(suite.benchmarks(), &filter);

        assert_eq!(ids(&plan), vec!["bench1", "bench3"]);
    }

    #[test]
    fn test_skip_tag_on_mutable_refs() {
        let mut suite = make_suite(&[
            ("bench1", "default", &["fast"]),
            ("bench2", "default", &["slow"]),
            ("bench3", "default", &["fast", "skip_ci"]),
        ]);
        let filter = PlanFilter {
            skip_tag: Some("skip_ci"),
            ..Default::default()
        };

        let plan = build_plan(suite.benchmarks_mut().iter_mut(), &filter);

        assert_eq!(ids(&plan), vec!["bench1", "bench2"]);
    }
}
