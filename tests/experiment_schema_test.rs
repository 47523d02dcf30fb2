//! Experiment schema tests: loading and validating result JSON

use experiment_pages::experiment::{load_experiment, ExperimentRecord, REQUIRED_FIELDS};
use experiment_pages::render::{leaderboard_row, render_experiment_page};
use experiment_pages::{Error, SiteLinks};
use serde_json::{json, Value};

fn full_record_json() -> Value {
    json!({
        "run_id": "abc123",
        "date": "2024-03-01",
        "dataset": "mnist",
        "model": "resnet18",
        "metrics": {"auc": 0.95, "f1": 0.88},
        "git_commit": "9f2c1ab",
        "runtime_minutes": 12.5,
        "config": {"optimizer": "adam", "layers": [64, 32]}
    })
}

// =============================================================================
// Required fields
// =============================================================================

#[test]
fn test_all_required_fields_accepted() {
    let record = ExperimentRecord::from_value(json!({
        "run_id": "abc123",
        "date": "2024-03-01",
        "dataset": "mnist",
        "model": "resnet18",
        "metrics": {"auc": 0.95}
    }))
    .expect("valid record rejected");

    assert_eq!(record.run_id(), "abc123");
    assert_eq!(record.date(), "2024-03-01");
    assert_eq!(record.dataset(), "mnist");
    assert_eq!(record.model(), "resnet18");
    assert_eq!(record.metric("auc"), Some(&json!(0.95)));
    assert!(record.git_commit().is_none());
    assert!(record.runtime_minutes().is_none());
    assert!(record.config().is_none());
}

#[test]
fn test_each_missing_field_named_individually() {
    for field in REQUIRED_FIELDS {
        let mut value = full_record_json();
        value.as_object_mut().unwrap().remove(field);

        match ExperimentRecord::from_value(value) {
            Err(Error::Validation { missing }) => assert_eq!(missing, vec![field.to_string()]),
            other => panic!("removing {field} should fail validation, got {other:?}"),
        }
    }
}

#[test]
fn test_validation_message_lists_missing_fields() {
    let err = ExperimentRecord::from_json_str(r#"{"run_id": "x", "date": "2024-01-01"}"#)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Missing required fields"));
    assert!(message.contains("dataset"));
    assert!(message.contains("model"));
    assert!(message.contains("metrics"));
    assert!(!message.contains("run_id"));
}

#[test]
fn test_empty_object_missing_everything() {
    let err = ExperimentRecord::from_json_str("{}").unwrap_err();
    match err {
        Error::Validation { missing } => assert_eq!(missing, REQUIRED_FIELDS.to_vec()),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =============================================================================
// Optional fields and pass-through
// =============================================================================

#[test]
fn test_optional_fields_loaded() {
    let record = ExperimentRecord::from_value(full_record_json()).unwrap();

    assert_eq!(record.git_commit(), Some(&json!("9f2c1ab")));
    assert_eq!(record.runtime_minutes().unwrap().to_string(), "12.5");
    assert_eq!(
        record.config(),
        Some(&json!({"optimizer": "adam", "layers": [64, 32]}))
    );
}

#[test]
fn test_null_optionals_are_absent() {
    let record = ExperimentRecord::from_json_str(
        r#"{"run_id":"r","date":"2024-01-01","dataset":"d","model":"m","metrics":{},
            "git_commit":null,"runtime_minutes":null,"config":null}"#,
    )
    .unwrap();
    assert!(record.git_commit().is_none());
    assert!(record.runtime_minutes().is_none());
    assert!(record.config().is_none());
}

#[test]
fn test_numeric_git_commit_loads() {
    let mut value = full_record_json();
    value["git_commit"] = json!(123);
    let record = ExperimentRecord::from_value(value).unwrap();
    assert_eq!(record.git_commit(), Some(&json!(123)));
}

#[test]
fn test_string_runtime_loads() {
    let mut value = full_record_json();
    value["runtime_minutes"] = json!("12");
    let record = ExperimentRecord::from_value(value).unwrap();
    assert_eq!(record.runtime_minutes(), Some(&json!("12")));
}

#[test]
fn test_numeric_model_loads() {
    let mut value = full_record_json();
    value["model"] = json!(18);
    let record = ExperimentRecord::from_value(value).unwrap();
    assert_eq!(record.model(), &json!(18));
}

#[test]
fn test_non_string_fields_render_as_is() {
    let mut value = full_record_json();
    value["git_commit"] = json!(123);
    value["runtime_minutes"] = json!("12");
    value["model"] = json!(18);
    let record = ExperimentRecord::from_value(value).unwrap();

    let page = render_experiment_page(&record, &[], &SiteLinks::default());
    assert!(page.contains("- **Model:** 18\n"));
    assert!(page.contains("- **Git commit:** `123`\n"));
    assert!(page.contains("- **Runtime:** 12 minutes\n"));

    let row = leaderboard_row(&record, &SiteLinks::default());
    assert!(row.contains("| 18 |"));
}

#[test]
fn test_unknown_keys_ignored() {
    let mut value = full_record_json();
    value["notes"] = json!("extra");
    assert!(ExperimentRecord::from_value(value).is_ok());
}

#[test]
fn test_metrics_preserve_source_order() {
    let record = ExperimentRecord::from_json_str(
        r#"{"run_id":"r","date":"2024-01-01","dataset":"d","model":"m",
            "metrics":{"zeta":1,"alpha":0.5,"mid":"x"}}"#,
    )
    .unwrap();
    let keys: Vec<&str> = record.metrics().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn test_malformed_json() {
    let err = ExperimentRecord::from_json_str("{\"run_id\": ").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_non_object_root() {
    let err = ExperimentRecord::from_json_str("\"just a string\"").unwrap_err();
    assert!(matches!(err, Error::NotAnObject("a string")));
}

#[test]
fn test_metrics_must_be_object() {
    let err = ExperimentRecord::from_json_str(
        r#"{"run_id":"r","date":"2024-01-01","dataset":"d","model":"m","metrics":[0.9]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// =============================================================================
// File loading
// =============================================================================

#[test]
fn test_load_experiment_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");
    std::fs::write(&path, full_record_json().to_string()).unwrap();

    let record = load_experiment(&path).unwrap();
    assert_eq!(record.run_id(), "abc123");
    assert_eq!(record.year(), "2024");
}

#[test]
fn test_load_experiment_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_experiment(dir.path().join("metrics.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_record_serialization_roundtrip() {
    let record = ExperimentRecord::from_value(full_record_json()).unwrap();
    let json = serde_json::to_string(&record).expect("serialization failed");
    let deserialized = ExperimentRecord::from_json_str(&json).expect("deserialization failed");
    assert_eq!(record, deserialized);
}
