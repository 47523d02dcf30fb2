//! Experiment Record - one run's published results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Experiment Record represents the results of a single experiment run.
///
/// Records are read once per invocation and never mutated. The metrics map
/// keeps the key order of the source JSON, which is the order the metrics
/// table is rendered in.
///
/// Only `run_id` and `date` must be strings, since both end up in file
/// paths. `dataset`, `model`, `git_commit` and `runtime_minutes` hold
/// whatever JSON the result file carried and are rendered as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentRecord {
    run_id: String,
    date: String,
    dataset: Value,
    model: Value,
    metrics: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    git_commit: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    runtime_minutes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<Value>,
}

impl ExperimentRecord {
    /// Create a builder for constructing a record in code.
    ///
    /// # Arguments
    ///
    /// * `run_id` - Unique identifier for the run
    /// * `date` - Run date, expected as `YYYY-MM-DD`
    /// * `dataset` - Dataset name
    /// * `model` - Model name
    #[must_use]
    pub fn builder(
        run_id: impl Into<String>,
        date: impl Into<String>,
        dataset: impl Into<Value>,
        model: impl Into<Value>,
    ) -> ExperimentRecordBuilder {
        ExperimentRecordBuilder::new(run_id, date, dataset, model)
    }

    /// Get the run ID.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Get the run date as written in the source JSON.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get the dataset name as written in the source JSON.
    #[must_use]
    pub const fn dataset(&self) -> &Value {
        &self.dataset
    }

    /// Get the model name as written in the source JSON.
    #[must_use]
    pub const fn model(&self) -> &Value {
        &self.model
    }

    /// Get the metrics, in source order.
    #[must_use]
    pub const fn metrics(&self) -> &Map<String, Value> {
        &self.metrics
    }

    /// Get a single metric value by key.
    #[must_use]
    pub fn metric(&self, key: &str) -> Option<&Value> {
        self.metrics.get(key)
    }

    /// Get the git commit, if recorded.
    #[must_use]
    pub const fn git_commit(&self) -> Option<&Value> {
        self.git_commit.as_ref()
    }

    /// Get the runtime in minutes, if recorded.
    #[must_use]
    pub const fn runtime_minutes(&self) -> Option<&Value> {
        self.runtime_minutes.as_ref()
    }

    /// Get the run configuration, if any.
    #[must_use]
    pub const fn config(&self) -> Option<&Value> {
        self.config.as_ref()
    }

    /// Year grouping key: the first four characters of the date.
    #[must_use]
    pub fn year(&self) -> &str {
        let end = self
            .date
            .char_indices()
            .nth(4)
            .map_or(self.date.len(), |(idx, _)| idx);
        &self.date[..end]
    }

    /// The date as a calendar date, if it is written as `YYYY-MM-DD`.
    ///
    /// Ordering never depends on this; the leaderboard sorts the raw strings.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Page stem shared by the page file name and its site link.
    #[must_use]
    pub fn page_stem(&self) -> String {
        format!("{}_{}", self.date, self.run_id)
    }
}

/// Builder for `ExperimentRecord`.
#[derive(Debug)]
pub struct ExperimentRecordBuilder {
    record: ExperimentRecord,
}

impl ExperimentRecordBuilder {
    /// Create a new builder with required fields and no metrics.
    #[must_use]
    pub fn new(
        run_id: impl Into<String>,
        date: impl Into<String>,
        dataset: impl Into<Value>,
        model: impl Into<Value>,
    ) -> Self {
        Self {
            record: ExperimentRecord {
                run_id: run_id.into(),
                date: date.into(),
                dataset: dataset.into(),
                model: model.into(),
                metrics: Map::new(),
                git_commit: None,
                runtime_minutes: None,
                config: None,
            },
        }
    }

    /// Append a metric. Metrics render in the order they are added.
    #[must_use]
    pub fn metric(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.metrics.insert(key.into(), value.into());
        self
    }

    /// Set the git commit.
    #[must_use]
    pub fn git_commit(mut self, commit: impl Into<Value>) -> Self {
        self.record.git_commit = Some(commit.into());
        self
    }

    /// Set the runtime in minutes.
    #[must_use]
    pub fn runtime_minutes(mut self, minutes: impl Into<Value>) -> Self {
        self.record.runtime_minutes = Some(minutes.into());
        self
    }

    /// Set the run configuration.
    #[must_use]
    pub fn config(mut self, config: Value) -> Self {
        self.record.config = Some(config);
        self
    }

    /// Build the `ExperimentRecord`.
    #[must_use]
    pub fn build(self) -> ExperimentRecord {
        self.record
    }
}
