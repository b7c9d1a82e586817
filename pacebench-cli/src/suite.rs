//! Benchmark Suite
//!
//! Registry of benchmarks and pairwise comparisons for a benchmark binary.
//!
//! ```
//! use pacebench_cli::Suite;
//!
//! let mut suite = Suite::new();
//! suite
//!     .bench("sum_range", |runner| runner.run(|| (0..100u64).sum::<u64>()))
//!     .group("math")
//!     .tags(["fast"])
//!     .iterations(10_000);
//! suite.bench("sum_vec", |runner| {
//!     let data: Vec<u64> = (0..100).collect();
//!     runner.run(|| data.iter().sum::<u64>())
//! });
//! suite.compare("range_vs_vec", "sum_range", "sum_vec");
//!
//! assert_eq!(suite.len(), 2);
//! ```

use pacebench_core::{BenchmarkOptions, BenchmarkResult, BenchmarkRunner, Result};

/// Routine that drives one benchmark through the runner it is handed
pub type BenchRoutine = Box<dyn FnMut(&BenchmarkRunner) -> Result<BenchmarkResult>>;

/// A registered benchmark
pub struct BenchmarkDef {
    /// Unique identifier
    pub id: String,
    /// Group for filtering and display
    pub group: String,
    /// Tags for filtering
    pub tags: Vec<String>,
    /// Per-benchmark overrides, applied over the global configuration
    pub options: BenchmarkOptions,
    routine: BenchRoutine,
}

impl BenchmarkDef {
    /// Set the group
    pub fn group(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = group.into();
        self
    }

    /// Replace the tag list
    pub fn tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Override iterations per sample
    pub fn iterations(&mut self, iterations: i64) -> &mut Self {
        self.options.iterations = Some(iterations);
        self
    }

    /// Override warm-up iterations
    pub fn warmup_iterations(&mut self, warmup_iterations: i64) -> &mut Self {
        self.options.warmup_iterations = Some(warmup_iterations);
        self
    }

    /// Override the sample count
    pub fn samples(&mut self, samples: i64) -> &mut Self {
        self.options.samples = Some(samples);
        self
    }

    /// Override the per-side trim fraction
    pub fn trim_fraction(&mut self, trim_fraction: f64) -> &mut Self {
        self.options.trim_fraction = Some(trim_fraction);
        self
    }

    /// Whether the benchmark carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub(crate) fn run(&mut self, runner: &BenchmarkRunner) -> Result<BenchmarkResult> {
        (self.routine)(runner)
    }
}

impl std::fmt::Debug for BenchmarkDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkDef")
            .field("id", &self.id)
            .field("group", &self.group)
            .field("tags", &self.tags)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Named comparison of a candidate benchmark against a baseline benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonDef {
    /// Comparison identifier
    pub id: String,
    /// Benchmark id used as the baseline
    pub baseline: String,
    /// Benchmark id compared against the baseline
    pub candidate: String,
}

/// Collection of benchmarks and comparisons
#[derive(Debug, Default)]
pub struct Suite {
    benchmarks: Vec<BenchmarkDef>,
    comparisons: Vec<ComparisonDef>,
}

impl Suite {
    /// Empty suite
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a benchmark in group `default`
    ///
    /// Registering an id twice replaces the earlier definition.
    pub fn bench<F>(&mut self, id: impl Into<String>, routine: F) -> &mut BenchmarkDef
    where
        F: FnMut(&BenchmarkRunner) -> Result<BenchmarkResult> + 'static,
    {
        let id = id.into();
        self.benchmarks.retain(|b| b.id != id);
        self.benchmarks.push(BenchmarkDef {
            id,
            group: "default".to_string(),
            tags: Vec::new(),
            options: BenchmarkOptions::default(),
            routine: Box::new(routine),
        });
        let last = self.benchmarks.len() - 1;
        &mut self.benchmarks[last]
    }

    /// Register a comparison of `candidate` against `baseline`
    pub fn compare(
        &mut self,
        id: impl Into<String>,
        baseline: impl Into<String>,
        candidate: impl Into<String>,
    ) -> &mut Self {
        self.comparisons.push(ComparisonDef {
            id: id.into(),
            baseline: baseline.into(),
            candidate: candidate.into(),
        });
        self
    }

    /// Registered benchmarks in registration order
    pub fn benchmarks(&self) -> &[BenchmarkDef] {
        &self.benchmarks
    }

    pub(crate) fn benchmarks_mut(&mut self) -> &mut [BenchmarkDef] {
        &mut self.benchmarks
    }

    /// Registered comparisons
    pub fn comparisons(&self) -> &[ComparisonDef] {
        &self.comparisons
    }

    /// Number of benchmarks
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Whether no benchmark is registered
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}
