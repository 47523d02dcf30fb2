//! Loader - reads and validates experiment result JSON

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::ExperimentRecord;
use crate::{Error, Result};

/// Keys every experiment JSON object must carry.
pub const REQUIRED_FIELDS: [&str; 5] = ["run_id", "date", "dataset", "model", "metrics"];

impl ExperimentRecord {
    /// Build a record from a parsed JSON value.
    ///
    /// Validation is presence-only: every key in [`REQUIRED_FIELDS`] must be
    /// present. Beyond that, only `run_id` and `date` must be strings and
    /// `metrics` an object; every other field is kept as the JSON it was.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAnObject`] if the value is not a JSON object
    /// - [`Error::Validation`] naming every absent required field
    /// - [`Error::Json`] if `run_id`/`date` is not a string or `metrics` is
    ///   not an object
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(object) = &value else {
            return Err(Error::NotAnObject(json_kind(&value)));
        };

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| (*field).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Validation { missing });
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Parse and validate an experiment JSON document.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] for malformed JSON, otherwise as [`Self::from_value`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }
}

/// Load and validate the experiment JSON at `path`.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, otherwise as
/// [`ExperimentRecord::from_json_str`].
pub fn load_experiment(path: impl AsRef<Path>) -> Result<ExperimentRecord> {
    let contents = fs::read_to_string(path.as_ref())?;
    ExperimentRecord::from_json_str(&contents)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
