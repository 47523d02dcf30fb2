//! # experiment-pages: Experiment results to documentation pages
//!
//! Turns experiment result directories (a `metrics.json` plus plot images)
//! into static documentation pages and a date-sorted leaderboard index.
//!
//! ## Pipeline
//!
//! ```text
//! <source_dir>/metrics.json ──loader──> ExperimentRecord
//! <source_dir>/*.png|svg|jpg ──artifacts──> static/artifacts/<run_id>/
//! ExperimentRecord ──render──> docs/experiments/<year>/<date>_<run_id>.mdx
//! all records of this run ──render──> docs/experiments/_index.mdx
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use experiment_pages::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::for_site_root(".");
//! let report = Generator::new(config).run(&["results/run-abc123"])?;
//! for failure in &report.failures {
//!     eprintln!("skipped {}: {}", failure.source.display(), failure.error);
//! }
//! # Ok::<(), experiment_pages::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod artifacts;
pub mod config;
pub mod error;
pub mod experiment;
pub mod generator;
pub mod render;

pub use config::{GeneratorConfig, SiteLinks};
pub use error::{Error, Result};
pub use experiment::{load_experiment, ExperimentRecord, ExperimentRegistry};
pub use generator::{GenerationReport, Generator, ProcessedRun, SourceFailure};

/// Command name used in usage text and generated pages.
pub const GENERATOR_NAME: &str = "generate-experiment-pages";
