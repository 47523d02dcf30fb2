//! Experiment result schema
//!
//! This module provides the data structures for one published experiment
//! run and the collection of runs processed by a single invocation.
//!
//! ## Schema Overview
//!
//! ```text
//! metrics.json ──load_experiment──> ExperimentRecord
//!                                        │
//!                                        └──> ExperimentRegistry (this invocation only)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use experiment_pages::experiment::{ExperimentRecord, ExperimentRegistry};
//!
//! let record = ExperimentRecord::from_json_str(
//!     r#"{"run_id":"abc123","date":"2024-03-01","dataset":"mnist",
//!         "model":"resnet18","metrics":{"auc":0.95,"f1":0.88}}"#,
//! )?;
//! assert_eq!(record.year(), "2024");
//!
//! let mut registry = ExperimentRegistry::new();
//! registry.add(record);
//! assert_eq!(registry.len(), 1);
//! # Ok::<(), experiment_pages::Error>(())
//! ```

mod experiment_record;
mod loader;
mod registry;

pub use experiment_record::{ExperimentRecord, ExperimentRecordBuilder};
pub use loader::{load_experiment, REQUIRED_FIELDS};
pub use registry::{sort_by_date_desc, ExperimentRegistry};
