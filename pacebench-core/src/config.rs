//! Benchmark Configuration
//!
//! Two layers:
//! - [`BenchmarkOptions`]: loosely typed input as it arrives from a config file
//!   or command line. Every field is optional and integers are signed, so a
//!   `warmup_iterations = -1` can be represented and rejected.
//! - [`BenchmarkConfig`]: the validated, immutable configuration a runner uses.

use crate::error::{BenchError, Result};
use pacebench_stats::{DEFAULT_TRIM_FRACTION, TrimPolicy};
use serde::{Deserialize, Serialize};

/// Default number of work-unit executions per sample
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Default number of untimed warm-up executions
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 10_000;

/// Default number of samples
pub const DEFAULT_SAMPLES: usize = 10;

/// Validated benchmark configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Display label
    pub name: String,
    /// Work-unit executions per sample (>= 1)
    pub iterations: u64,
    /// Untimed executions before sampling
    pub warmup_iterations: u64,
    /// Independent timing measurements (>= 1)
    pub samples: usize,
    /// Fraction of sorted samples trimmed from each end (`0.0 <= f < 0.5`)
    pub trim_fraction: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            iterations: DEFAULT_ITERATIONS,
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            samples: DEFAULT_SAMPLES,
            trim_fraction: DEFAULT_TRIM_FRACTION,
        }
    }
}

impl BenchmarkConfig {
    /// Default configuration with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set iterations per sample
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set warm-up iterations
    pub fn warmup_iterations(mut self, warmup_iterations: u64) -> Self {
        self.warmup_iterations = warmup_iterations;
        self
    }

    /// Set sample count
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set per-side trim fraction
    pub fn trim_fraction(mut self, trim_fraction: f64) -> Self {
        self.trim_fraction = trim_fraction;
        self
    }

    /// Trim policy derived from `trim_fraction`
    pub fn trim_policy(&self) -> TrimPolicy {
        TrimPolicy::new(self.trim_fraction)
    }

    /// Check the preconditions for running
    pub fn validate(&self) -> Result<()> {
        if self.iterations < 1 {
            return Err(BenchError::invalid(
                "iterations",
                format!("must be at least 1, got {}", self.iterations),
            ));
        }
        if self.samples < 1 {
            return Err(BenchError::invalid(
                "samples",
                format!("must be at least 1, got {}", self.samples),
            ));
        }
        if !self.trim_policy().is_valid() {
            return Err(BenchError::invalid(
                "trim_fraction",
                format!("must be within [0.0, 0.5), got {}", self.trim_fraction),
            ));
        }
        Ok(())
    }
}

/// Unvalidated configuration input with optional fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkOptions {
    /// Display label
    pub name: Option<String>,
    /// Work-unit executions per sample
    pub iterations: Option<i64>,
    /// Untimed executions before sampling
    pub warmup_iterations: Option<i64>,
    /// Number of samples
    pub samples: Option<i64>,
    /// Per-side trim fraction
    pub trim_fraction: Option<f64>,
}

impl BenchmarkOptions {
    /// Layer `other` over `self`: fields set in `other` win
    pub fn merge(&self, other: &BenchmarkOptions) -> BenchmarkOptions {
        BenchmarkOptions {
            name: other.name.clone().or_else(|| self.name.clone()),
            iterations: other.iterations.or(self.iterations),
            warmup_iterations: other.warmup_iterations.or(self.warmup_iterations),
            samples: other.samples.or(self.samples),
            trim_fraction: other.trim_fraction.or(self.trim_fraction),
        }
    }

    /// Apply defaults and validate
    pub fn resolve(&self) -> Result<BenchmarkConfig> {
        let defaults = BenchmarkConfig::default();

        let iterations = match self.iterations {
            Some(n) if n < 1 => {
                return Err(BenchError::invalid(
                    "iterations",
                    format!("must be at least 1, got {}", n),
                ));
            }
            Some(n) => n as u64,
            None => defaults.iterations,
        };

        let warmup_iterations = match self.warmup_iterations {
            Some(n) if n < 0 => {
                return Err(BenchError::invalid(
                    "warmup_iterations",
                    format!("must not be negative, got {}", n),
                ));
            }
            Some(n) => n as u64,
            None => defaults.warmup_iterations,
        };

        let samples = match self.samples {
            Some(n) if n < 1 => {
                return Err(BenchError::invalid(
                    "samples",
                    format!("must be at least 1, got {}", n),
                ));
            }
            Some(n) => usize::try_from(n)
                .map_err(|_| BenchError::invalid("samples", format!("too large: {}", n)))?,
            None => defaults.samples,
        };

        let config = BenchmarkConfig {
            name: self.name.clone().unwrap_or(defaults.name),
            iterations,
            warmup_iterations,
            samples,
            trim_fraction: self.trim_fraction.unwrap_or(defaults.trim_fraction),
        };
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<BenchmarkOptions> for BenchmarkConfig {
    type Error = BenchError;

    fn try_from(options: BenchmarkOptions) -> Result<Self> {
        options.resolve()
    }
}

impl From<&BenchmarkConfig> for BenchmarkOptions {
    fn from(config: &BenchmarkConfig) -> Self {
        Self {
            name: Some(config.name.clone()),
            iterations: i64::try_from(config.iterations).ok(),
            warmup_iterations: i64::try_from(config.warmup_iterations).ok(),
            samples: i64::try_from(config.samples).ok(),
            trim_fraction: Some(config.trim_fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchmarkConfig::new("noop");
        assert_eq!(config.name, "noop");
        assert_eq!(config.iterations, 1_000_000);
        assert_eq!(config.warmup_iterations, 10_000);
        assert_eq!(config.samples, 10);
        assert!((config.trim_fraction - 0.10).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let err = BenchmarkConfig::new("x").iterations(0).validate().unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidConfiguration {
                field: "iterations",
                ..
            }
        ));

        let err = BenchmarkConfig::new("x").samples(0).validate().unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidConfiguration { field: "samples", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_trim_fraction() {
        for fraction in [0.5, -0.01, f64::NAN, f64::INFINITY] {
            let err = BenchmarkConfig::new("x")
                .trim_fraction(fraction)
                .validate()
                .unwrap_err();
            assert!(err.is_invalid_configuration());
        }
        assert!(BenchmarkConfig::new("x").trim_fraction(0.0).validate().is_ok());
    }

    #[test]
    fn test_options_resolve_defaults() {
        let config = BenchmarkOptions::default().resolve().unwrap();
        assert_eq!(config, BenchmarkConfig::default());
    }

    #[test]
    fn test_options_reject_negative_warmup() {
        let options = BenchmarkOptions {
            warmup_iterations: Some(-1),
            ..Default::default()
        };
        let err = BenchmarkConfig::try_from(options).unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidConfiguration {
                field: "warmup_iterations",
                ..
            }
        ));
    }

    #[test]
    fn test_options_reject_zero_and_negative() {
        for options in [
            BenchmarkOptions {
                iterations: Some(0),
                ..Default::default()
            },
            BenchmarkOptions {
                samples: Some(0),
                ..Default::default()
            },
            BenchmarkOptions {
                samples: Some(-3),
                ..Default::default()
            },
        ] {
            assert!(options.resolve().unwrap_err().is_invalid_configuration());
        }
    }

    #[test]
    fn test_options_zero_warmup_allowed() {
        let options = BenchmarkOptions {
            warmup_iterations: Some(0),
            ..Default::default()
        };
        assert_eq!(options.resolve().unwrap().warmup_iterations, 0);
    }

    #[test]
    fn test_merge_layers() {
        let base = BenchmarkOptions {
            name: Some("base".to_string()),
            iterations: Some(100),
            samples: Some(5),
            ..Default::default()
        };
        let overrides = BenchmarkOptions {
            iterations: Some(50),
            trim_fraction: Some(0.2),
            ..Default::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.name.as_deref(), Some("base"));
        assert_eq!(merged.iterations, Some(50));
        assert_eq!(merged.samples, Some(5));
        assert_eq!(merged.trim_fraction, Some(0.2));
        assert_eq!(merged.warmup_iterations, None);
    }

    #[test]
    fn test_options_from_json() {
        let options: BenchmarkOptions =
            serde_json::from_str(r#"{"iterations": 100, "warmup_iterations": -1}"#).unwrap();
        assert_eq!(options.iterations, Some(100));
        assert!(options.resolve().is_err());
    }

    #[test]
    fn test_round_trip_through_options() {
        let config = BenchmarkConfig::new("rt").iterations(42).samples(3);
        let options = BenchmarkOptions::from(&config);
        assert_eq!(options.resolve().unwrap(), config);
    }
}
