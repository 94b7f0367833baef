//! Integration tests for MarshalConfig loading.

use sample_matrix::{MarshalConfig, MatrixSil};

#[test]
fn config_serializes_to_json() {
    let cfg = MarshalConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("check_columns"));
    assert!(json.contains("log_filter"));
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marshal.json");
    std::fs::write(&path, r#"{"check_columns": true, "log_filter": "debug"}"#).unwrap();

    let cfg = MarshalConfig::from_json_file(&path).unwrap();
    assert!(cfg.check_columns);
    assert_eq!(cfg.log_filter, "debug");
}

#[test]
fn missing_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"check_columns": true}"#).unwrap();

    let cfg = MarshalConfig::from_json_file(&path).unwrap();
    assert!(cfg.check_columns);
    assert_eq!(cfg.log_filter, MarshalConfig::default().log_filter);
}

#[test]
fn missing_file_errors() {
    let err = MarshalConfig::from_json_file("/nonexistent/path/marshal.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn loaded_config_reaches_the_boundary() {
    let cfg = MarshalConfig::from_json_str(r#"{"check_columns": true}"#).unwrap();
    let sil: MatrixSil = MatrixSil::with_config(cfg);
    assert!(sil.config().check_columns);
}
