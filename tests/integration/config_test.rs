use metricconv::core::config::{load_registry_from, Config, RegistrySource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.registry_path.is_none());
}

#[test]
fn test_config_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_registry_path("/opt/metrics/registry.json".to_string());
    config.save_to(&config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.get_registry_path(),
        Some(&"/opt/metrics/registry.json".to_string())
    );
}

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_config_corrupted_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, "not json at all").unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_config_registry_is_used_without_flag() {
    let config = Config {
        registry_path: Some("/srv/registry.json".to_string()),
    };

    // The environment variable may be set on developer machines
    match config.registry_source(None) {
        RegistrySource::Env(_) => {}
        source => assert_eq!(
            source,
            RegistrySource::Config(PathBuf::from("/srv/registry.json"))
        ),
    }
}

#[test]
fn test_load_registry_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let registry_path = temp_dir.path().join("registry.json");
    fs::write(
        &registry_path,
        r##"[{"metrics":"Disk","baseUnit":"MiB","metricsConfig":{"formula":"#VALUE / 1048576"}}]"##,
    )
    .unwrap();

    let registry = load_registry_from(&RegistrySource::Config(registry_path)).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.definitions()[0].base_unit, "MiB");
}

#[test]
fn test_load_registry_missing_file_has_context() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let err = load_registry_from(&RegistrySource::Flag(missing)).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load metrics registry"));
}
