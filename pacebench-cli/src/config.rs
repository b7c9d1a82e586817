//! Configuration loading from pace.toml
//!
//! PaceBench configuration can be specified in a `pace.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use pacebench_core::BenchmarkOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up by [`PaceConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "pace.toml";

/// Baseline file name inside the output directory, used when neither the
/// CLI nor `pace.toml` names a baseline path
pub const DEFAULT_BASELINE_FILE: &str = "baseline.json";

/// PaceBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PaceConfig {
    /// Runner defaults applied to every benchmark
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// CI/CD configuration
    #[serde(default)]
    pub ci: CiConfig,
}

/// Runner defaults. Unset fields fall back to the built-in defaults.
///
/// Integers are signed so that out-of-range values reach validation and are
/// reported as configuration errors instead of TOML type errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Work-unit executions per sample
    #[serde(default)]
    pub iterations: Option<i64>,
    /// Untimed executions before sampling
    #[serde(default)]
    pub warmup_iterations: Option<i64>,
    /// Number of samples
    #[serde(default)]
    pub samples: Option<i64>,
    /// Fraction trimmed from each end of the sorted samples
    #[serde(default)]
    pub trim_fraction: Option<f64>,
}

impl RunnerConfig {
    /// Runner section as a configuration layer
    pub fn options(&self) -> BenchmarkOptions {
        BenchmarkOptions {
            name: None,
            iterations: self.iterations,
            warmup_iterations: self.warmup_iterations,
            samples: self.samples,
            trim_fraction: self.trim_fraction,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory holding the default baseline file
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Save JSON baseline after each run
    #[serde(default)]
    pub save_baseline: bool,
    /// Baseline file path
    #[serde(default)]
    pub baseline_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: default_output_dir(),
            save_baseline: false,
            baseline_path: None,
        }
    }
}

impl OutputConfig {
    /// Configured baseline path, or `baseline.json` in the output directory
    pub fn baseline_path_or_default(&self) -> PathBuf {
        self.baseline_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(&self.directory).join(DEFAULT_BASELINE_FILE))
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_output_dir() -> String {
    "target/pacebench".to_string()
}

/// CI/CD configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CiConfig {
    /// Regression threshold percentage (fail if exceeded)
    #[serde(default = "default_threshold")]
    pub regression_threshold: f64,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            regression_threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    5.0
}

impl PaceConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `pace.toml`
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable config"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# PaceBench Configuration

[runner]
# Work-unit executions per sample (default 1000000)
# iterations = 1000000
# Untimed executions before sampling (default 10000)
# warmup_iterations = 10000
# Number of samples (default 10)
# samples = 10
# Fraction trimmed from each end of the sorted samples (default 0.10)
# trim_fraction = 0.10

[output]
# Default output format: human, json, csv
format = "human"
# Directory holding the default baseline file (baseline.json)
directory = "target/pacebench"
# Save JSON baseline after each run
save_baseline = false
# Baseline file for comparison (uncomment to enable)
# baseline_path = "baseline.json"

[ci]
# Regression threshold percentage (fail CI if exceeded)
regression_threshold = 5.0
"#
        .to_string()
    }
}
