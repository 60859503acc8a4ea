// Tests for loading registries from disk

use metricconv::core::registry::DEFAULT_REGISTRY_JSON;
use metricconv::{convert_memory, MetricsRegistry};
use std::fs;
use tempfile::TempDir;

const HOST_REGISTRY: &str = r##"[
  {
    "metrics": "CPU",
    "baseUnit": "Percentage",
    "metricsConfig": {
      "shortCode": "CPU",
      "description": "cpu usage",
      "formula": "(#VALUE / #TOTAL_VALUE) * 100"
    }
  },
  {
    "metrics": "Memory",
    "baseUnit": "Bytes",
    "metricsConfig": { "shortCode": "RAW", "description": "", "formula": "#VALUE" }
  },
  {
    "metrics": "Memory",
    "baseUnit": "Percentage",
    "metricsConfig": { "shortCode": "MEM_PCT", "description": "", "formula": "(#VALUE / #TOTAL_VALUE) * 100" }
  }
]"##;

#[test]
fn test_load_registry_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    fs::write(&path, HOST_REGISTRY).unwrap();

    let registry = MetricsRegistry::load(&path).unwrap();
    assert_eq!(registry.len(), 3);

    let kinds: Vec<&str> = registry.iter().map(|d| d.kind.as_str()).collect();
    assert_eq!(kinds, vec!["CPU", "Memory", "Memory"]);
}

#[test]
fn test_loaded_registry_skips_bytes_definition() {
    let registry = MetricsRegistry::from_json_str(HOST_REGISTRY).unwrap();
    let reading = convert_memory(&registry, 25, 100, 75).unwrap();
    assert_eq!((reading.used, reading.total, reading.free), (25.0, 100.0, 75.0));
    assert_eq!(reading.unit, "Percentage");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = MetricsRegistry::load(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, metricconv::ConvError::Io(_)));
}

#[test]
fn test_load_malformed_file_is_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{"metrics": "CPU"}"#).unwrap();

    let err = MetricsRegistry::load(&path).unwrap_err();
    assert!(matches!(err, metricconv::ConvError::Json(_)));
}

#[test]
fn test_registry_changes_take_effect_on_next_call() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");

    fs::write(&path, "[]").unwrap();
    let before = MetricsRegistry::load(&path).unwrap();
    assert!(convert_memory(&before, 1, 2, 1).unwrap().is_bytes());

    fs::write(&path, HOST_REGISTRY).unwrap();
    let after = MetricsRegistry::load(&path).unwrap();
    assert_eq!(convert_memory(&after, 1, 2, 1).unwrap().unit, "Percentage");
}

#[test]
fn test_written_registry_reloads_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("copy.json");

    let original = MetricsRegistry::from_json_str(DEFAULT_REGISTRY_JSON).unwrap();
    fs::write(&path, original.to_json_pretty().unwrap()).unwrap();

    assert_eq!(MetricsRegistry::load(&path).unwrap(), original);
}
