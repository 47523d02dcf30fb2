//! Generator - drives one publishing run over a list of result directories
//!
//! Each source directory is processed on its own: load `metrics.json`, copy
//! artifacts, render and write the run page. A failure is recorded against
//! that directory and processing moves on, so one bad input never aborts
//! the run. Pages already written stay written.
//!
//! ## Example
//!
//! ```rust,no_run
//! use experiment_pages::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::for_site_root("site"));
//! let report = generator.run(&["results/run-abc123", "results/run-def456"])?;
//! println!("{} of {} succeeded", report.processed_count(), report.source_count());
//! # Ok::<(), experiment_pages::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::artifacts::{copy_artifacts, METRICS_FILE};
use crate::config::{validate_date, GeneratorConfig};
use crate::experiment::{load_experiment, ExperimentRecord, ExperimentRegistry};
use crate::render::{render_experiment_page, render_index_page};
use crate::{Error, Result};

/// A source directory that was published successfully.
#[derive(Debug, Clone)]
pub struct ProcessedRun {
    /// Directory the run was read from
    pub source: PathBuf,
    /// Loaded experiment record
    pub record: ExperimentRecord,
    /// Copied artifact file names
    pub artifacts: Vec<String>,
    /// Written page
    pub page_path: PathBuf,
}

/// A source directory that was skipped.
#[derive(Debug)]
pub struct SourceFailure {
    /// Directory that failed
    pub source: PathBuf,
    /// Why it failed
    pub error: Error,
}

/// Outcome of one generator run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Successfully processed runs, in input order
    pub processed: Vec<ProcessedRun>,
    /// Skipped sources, in input order
    pub failures: Vec<SourceFailure>,
    /// Leaderboard page, if one was written
    pub index_path: Option<PathBuf>,
}

impl GenerationReport {
    /// Number of runs published.
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Number of sources skipped.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of sources given to the run.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.processed_count() + self.failed_count()
    }

    /// Registry of the records published by this run.
    #[must_use]
    pub fn registry(&self) -> ExperimentRegistry {
        self.processed.iter().map(|run| run.record.clone()).collect()
    }
}

/// Publishes experiment result directories into a documentation site tree.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator writing to the locations in `config`.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Process every source directory in order, then regenerate the index
    /// from the runs that succeeded.
    ///
    /// The index is overwritten with this run's records only, and only if
    /// at least one source succeeded.
    ///
    /// # Errors
    ///
    /// Per-source failures never surface here; they are collected in the
    /// report. An error is returned only if the output roots cannot be
    /// created or the index cannot be written.
    pub fn run<P: AsRef<Path>>(&self, sources: &[P]) -> Result<GenerationReport> {
        fs::create_dir_all(&self.config.artifacts_dir)?;
        fs::create_dir_all(&self.config.experiments_dir)?;

        let mut report = GenerationReport::default();

        for source in sources {
            let source = source.as_ref();
            match self.process_source(source) {
                Ok(run) => report.processed.push(run),
                Err(error) => {
                    if error.is_missing_input() {
                        warn!("{error}");
                    } else {
                        error!("Error processing {}: {error}", source.display());
                    }
                    report.failures.push(SourceFailure {
                        source: source.to_path_buf(),
                        error,
                    });
                }
            }
        }

        let registry = report.registry();
        if !registry.is_empty() {
            let index_path = self.config.index_path();
            fs::write(&index_path, render_index_page(registry.records(), &self.config.links))?;
            info!("Updated index page: {}", index_path.display());
            report.index_path = Some(index_path);
        }

        info!("Processed {} experiment(s)", report.processed_count());
        if report.failed_count() > 0 {
            warn!(
                "Skipped {} of {} source director{}",
                report.failed_count(),
                report.source_count(),
                if report.source_count() == 1 { "y" } else { "ies" }
            );
        }

        Ok(report)
    }

    /// Publish a single source directory.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingSourceDirectory`] if `source` does not exist
    /// - [`Error::MissingMetricsFile`] if it has no `metrics.json`
    /// - [`Error::UnsafeDate`] or [`Error::UnsafeRunId`] if the record would
    ///   write outside the output roots; nothing is copied or written then
    /// - any loader, copy or write error
    pub fn process_source(&self, source: &Path) -> Result<ProcessedRun> {
        if !source.exists() {
            return Err(Error::MissingSourceDirectory(source.to_path_buf()));
        }
        let metrics_file = source.join(METRICS_FILE);
        if !metrics_file.is_file() {
            return Err(Error::MissingMetricsFile(metrics_file));
        }

        let record = load_experiment(&metrics_file)?;
        validate_date(record.date())?;
        let run_id = record.run_id();
        if record.calendar_date().is_none() {
            warn!(
                "Run {run_id}: date {:?} is not YYYY-MM-DD; leaderboard order uses plain string comparison",
                record.date()
            );
        }

        let artifacts = copy_artifacts(source, &self.config.artifacts_dir, run_id)?;
        info!("Copied {} artifacts for run {run_id}", artifacts.len());

        let page = render_experiment_page(&record, &artifacts, &self.config.links);
        fs::create_dir_all(self.config.year_dir(&record))?;
        let page_path = self.config.page_path(&record);
        fs::write(&page_path, page)?;
        info!("Generated page: {}", page_path.display());

        Ok(ProcessedRun {
            source: source.to_path_buf(),
            record,
            artifacts,
            page_path,
        })
    }
}
