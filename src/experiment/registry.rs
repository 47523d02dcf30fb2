//! Experiment Registry - records processed in the current invocation
//!
//! The registry is rebuilt from scratch on every run and only ever holds
//! the records loaded by that run; it is what the leaderboard is rendered
//! from.

use super::ExperimentRecord;

/// In-memory collection of the experiment records processed in one
/// invocation, kept in processing order.
#[derive(Debug, Default)]
pub struct ExperimentRegistry {
    records: Vec<ExperimentRecord>,
}

impl ExperimentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Add a record. Duplicate run IDs are kept as separate entries.
    pub fn add(&mut self, record: ExperimentRecord) {
        self.records.push(record);
    }

    /// All records in processing order.
    #[must_use]
    pub fn records(&self) -> &[ExperimentRecord] {
        &self.records
    }

    /// Records ordered newest first by plain string comparison of their
    /// dates. Records with equal dates keep processing order.
    #[must_use]
    pub fn sorted_by_date_desc(&self) -> Vec<&ExperimentRecord> {
        sort_by_date_desc(&self.records)
    }
}

impl FromIterator<ExperimentRecord> for ExperimentRegistry {
    fn from_iter<I: IntoIterator<Item = ExperimentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Stable newest-first ordering by raw date string.
#[must_use]
pub fn sort_by_date_desc(records: &[ExperimentRecord]) -> Vec<&ExperimentRecord> {
    let mut sorted: Vec<&ExperimentRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(a.date()));
    sorted
}
