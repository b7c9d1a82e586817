//! Benchmark Executor
//!
//! Runs a planned selection of suite benchmarks and assembles the report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! BenchmarkDef (registered in a Suite)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Resolve config, run, collect result or error
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build Report, evaluate pairwise comparisons
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Sequential in-process execution with a progress bar
//! - [`report`] - Report building and pairwise comparisons
//! - [`metadata`] - System metadata collection

mod execution;
mod metadata;
mod report;

pub use execution::{BenchExecutionResult, Executor};
pub use metadata::build_report_meta;
pub use report::{build_report, execute_comparisons};
