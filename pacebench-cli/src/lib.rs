#![warn(missing_docs)]
//! PaceBench CLI Library
//!
//! This module provides the CLI infrastructure for benchmark binaries.
//! Build a [`Suite`] and hand it to `pacebench::run()` (or
//! `pacebench_cli::run()`) in your main function to get filtering, output
//! formats and baseline regression checks.
//!
//! # Example
//!
//! ```no_run
//! use pacebench_cli::Suite;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut suite = Suite::new();
//!     suite.bench("vec_push", |runner| {
//!         runner.run(|| {
//!             let mut v = Vec::with_capacity(16);
//!             v.extend(0..16u32);
//!             v
//!         })
//!     });
//!     pacebench_cli::run(suite)
//! }
//! ```

mod baseline;
mod config;
mod executor;
mod planner;
mod suite;

pub use baseline::{apply_baseline_comparison, load_baseline, save_baseline};
pub use config::*;
pub use executor::{
    BenchExecutionResult, Executor, build_report, build_report_meta, execute_comparisons,
};
pub use planner::{ExecutionPlan, PlanFilter, build_plan};
pub use suite::{BenchRoutine, BenchmarkDef, ComparisonDef, Suite};

use anyhow::Context;
use clap::{Parser, Subcommand};
use pacebench_core::BenchmarkOptions;
use pacebench_report::{OutputFormat, Report};
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// PaceBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "pacebench")]
#[command(author, version, about = "PaceBench - micro-benchmark harness for Rust")]
pub struct Cli {
    /// Optional subcommand (List, Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter benchmarks by regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Output format: human, json, csv (defaults to pace.toml, then human)
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run benchmarks for this group only
    #[arg(long)]
    pub group: Option<String>,

    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Skip benchmarks with this tag
    #[arg(long)]
    pub skip_tag: Option<String>,

    /// Work-unit executions per sample
    #[arg(long, allow_negative_numbers = true)]
    pub iterations: Option<i64>,

    /// Untimed warm-up executions
    #[arg(long, allow_negative_numbers = true)]
    pub warmup: Option<i64>,

    /// Number of samples
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub samples: Option<i64>,

    /// Fraction of sorted samples trimmed from each end
    #[arg(long)]
    pub trim: Option<f64>,

    /// Load baseline for comparison
    /// Optionally specify a path; defaults to config or target/pacebench/baseline.json
    #[arg(long)]
    pub baseline: Option<Option<PathBuf>>,

    /// Save benchmark results as baseline JSON
    /// Optionally specify a path; defaults to config or target/pacebench/baseline.json
    #[arg(long)]
    pub save_baseline: Option<Option<PathBuf>>,

    /// Regression threshold percentage
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Internal: Absorb cargo bench's --bench flag
    #[arg(long, hide = true)]
    pub bench: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// List all registered benchmarks
    List,
    /// Run benchmarks (default)
    Run,
    /// Print a default pace.toml
    Init,
}

/// Outcome of a completed `run`
#[derive(Debug)]
pub struct RunOutcome {
    /// Report that was rendered
    pub report: Report,
    /// Regression threshold the baseline comparison used
    pub threshold: f64,
}

impl RunOutcome {
    /// Whether the process should exit with a failure status
    pub fn should_fail(&self) -> bool {
        self.report.summary.failed > 0 || self.report.summary.regressions > 0
    }
}

/// Run the PaceBench CLI with the given suite.
/// This is the main entry point for benchmark binaries.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong. Exits
/// the process with status 1 when benchmarks fail or regress.
pub fn run(suite: Suite) -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli, suite)
}

/// Run the PaceBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli, mut suite: Suite) -> anyhow::Result<()> {
    init_tracing(cli.verbose);

    // Discover pace.toml configuration (CLI flags override)
    let config = PaceConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::List) => list_benchmarks(&cli, &suite)?,
        Some(Commands::Init) => print!("{}", PaceConfig::default_toml()),
        Some(Commands::Run) | None => {
            let outcome = run_benchmarks(&cli, &config, &mut suite)?;
            if outcome.should_fail() {
                if outcome.report.summary.failed > 0 {
                    eprintln!("\n{} benchmark(s) failed", outcome.report.summary.failed);
                }
                if outcome.report.summary.regressions > 0 {
                    eprintln!(
                        "\n{} regression(s) detected above {}% threshold",
                        outcome.report.summary.regressions, outcome.threshold
                    );
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Install the global tracing subscriber; `RUST_LOG` takes precedence
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pacebench=debug"
    } else {
        "pacebench=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Already installed when embedded in a host that set its own subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layer CLI flags over the `[runner]` section of `pace.toml`
pub fn build_options(cli: &Cli, config: &PaceConfig) -> BenchmarkOptions {
    let cli_layer = BenchmarkOptions {
        name: None,
        iterations: cli.iterations,
        warmup_iterations: cli.warmup,
        samples: cli.samples,
        trim_fraction: cli.trim,
    };
    config.runner.options().merge(&cli_layer)
}

fn plan_filter<'a>(cli: &'a Cli, pattern: &'a Regex) -> PlanFilter<'a> {
    PlanFilter {
        pattern: Some(pattern),
        group: cli.group.as_deref(),
        tag: cli.tag.as_deref(),
        skip_tag: cli.skip_tag.as_deref(),
    }
}

fn compile_filter(cli: &Cli) -> anyhow::Result<Regex> {
    Regex::new(&cli.filter).with_context(|| format!("invalid filter pattern '{}'", cli.filter))
}

fn list_benchmarks(cli: &Cli, suite: &Suite) -> anyhow::Result<()> {
    println!("PaceBench Plan:");

    let pattern = compile_filter(cli)?;
    let plan = build_plan(suite.benchmarks(), &plan_filter(cli, &pattern));

    let mut groups: std::collections::BTreeMap<&str, Vec<&BenchmarkDef>> =
        std::collections::BTreeMap::new();
    for &bench in &plan.benchmarks {
        groups.entry(bench.group.as_str()).or_default().push(bench);
    }

    let mut total = 0;
    for (group, benches) in &groups {
        println!("├── group: {}", group);
        for bench in benches {
            let tags = if bench.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", bench.tags.join(", "))
            };
            println!("│   ├── {}{}", bench.id, tags);
            total += 1;
        }
    }

    println!("{} benchmarks found.", total);

    // Show all available tags across the entire suite (not just filtered results)
    let mut tag_counts: std::collections::BTreeMap<&str, usize> =
        std::collections::BTreeMap::new();
    for bench in suite.benchmarks() {
        for tag in &bench.tags {
            *tag_counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    if !tag_counts.is_empty() {
        let tags_display: Vec<String> = tag_counts
            .iter()
            .map(|(tag, count)| format!("{} ({})", tag, count))
            .collect();
        println!("Tags: {}", tags_display.join(", "));
    }

    if !suite.comparisons().is_empty() {
        println!("Comparisons:");
        for cmp in suite.comparisons() {
            println!("  {}: {} vs {}", cmp.id, cmp.candidate, cmp.baseline);
        }
    }

    Ok(())
}

/// Execute the selected benchmarks, render the report and handle baselines
pub fn run_benchmarks(
    cli: &Cli,
    config: &PaceConfig,
    suite: &mut Suite,
) -> anyhow::Result<RunOutcome> {
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)?;

    let threshold = cli.threshold.unwrap_or(config.ci.regression_threshold);
    if !threshold.is_finite() || threshold < 0.0 {
        anyhow::bail!(
            "regression threshold must be a non-negative number, got {}",
            threshold
        );
    }

    // Reject a bad global layer before anything runs
    let options = build_options(cli, config);
    options
        .resolve()
        .context("invalid benchmark configuration")?;

    let pattern = compile_filter(cli)?;
    let comparisons = suite.comparisons().to_vec();
    let all_tags: std::collections::BTreeSet<String> = suite
        .benchmarks()
        .iter()
        .flat_map(|b| b.tags.iter().cloned())
        .collect();

    let plan = build_plan(suite.benchmarks_mut().iter_mut(), &plan_filter(cli, &pattern));

    if plan.benchmarks.is_empty() {
        // If filtering by tag and no matches, check if the tag exists at all
        if let Some(ref tag) = cli.tag {
            if !all_tags.contains(tag) {
                let available: Vec<&str> = all_tags.iter().map(String::as_str).collect();
                eprintln!(
                    "Warning: tag '{}' not found. Available tags: {}",
                    tag,
                    available.join(", ")
                );
            }
        }
        println!("No benchmarks found.");
        let report = build_report(Vec::new(), &[], 0.0);
        return Ok(RunOutcome { report, threshold });
    }

    info!(benchmarks = plan.benchmarks.len(), "running benchmarks");
    eprintln!("Running {} benchmarks...\n", plan.benchmarks.len());

    let start_time = Instant::now();
    let results = Executor::new(options).execute(plan.benchmarks);

    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    let mut report = build_report(results, &comparisons, total_duration_ms);

    // Load and apply baseline comparison if --baseline was passed
    if let Some(baseline_path) = resolve_baseline_path(&cli.baseline, config) {
        if baseline_path.exists() {
            match load_baseline(&baseline_path) {
                Ok(baseline) => apply_baseline_comparison(&mut report, &baseline, threshold),
                Err(e) => eprintln!("Warning: {:#}", e),
            }
        } else {
            eprintln!(
                "Warning: baseline file not found: {}",
                baseline_path.display()
            );
        }
    }

    let output = format.render(&report)?;

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        eprintln!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    save_baseline_if_needed(cli, config, &report)?;

    Ok(RunOutcome { report, threshold })
}

/// Save the report as a baseline JSON file if configured.
fn save_baseline_if_needed(
    cli: &Cli,
    config: &PaceConfig,
    report: &Report,
) -> anyhow::Result<()> {
    // Determine if we should save: CLI --save-baseline flag or config.output.save_baseline
    let should_save = cli.save_baseline.is_some() || config.output.save_baseline;
    if !should_save {
        return Ok(());
    }

    // Resolve path: CLI value > config value > default
    let path = cli
        .save_baseline
        .as_ref()
        .and_then(|opt| opt.clone())
        .unwrap_or_else(|| config.output.baseline_path_or_default());

    save_baseline(&path, report)?;
    eprintln!("Baseline saved to: {}", path.display());

    Ok(())
}

/// Resolve baseline path from CLI flag, config, or default.
///
/// - `Some(Some(path))`: explicit path from `--baseline /path/to/file`
/// - `Some(None)`: `--baseline` with no value, use config or default
/// - `None`: flag not passed at all
fn resolve_baseline_path(
    cli_baseline: &Option<Option<PathBuf>>,
    config: &PaceConfig,
) -> Option<PathBuf> {
    match cli_baseline {
        Some(Some(path)) => Some(path.clone()),
        Some(None) => Some(config.output.baseline_path_or_default()),
        None => None,
    }
}
