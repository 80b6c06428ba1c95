//! Configuration Tests

use std::fs;

use fes_model::config::{ModelConfig, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[notifications]\ntrace = true\n\n[catalog]\noutput_format = \"compact\"\n",
    )
    .unwrap();

    let config = ModelConfig::load_from(Some(&path)).unwrap();
    assert!(config.notifications.trace);
    assert!(config.notifications.deliver);
    assert_eq!(config.catalog.output_format, OutputFormat::Compact);
    assert!(config.catalog.include_defaults);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(ModelConfig::load_from(Some(&path)).is_err());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fes-model.toml");

    let mut config = ModelConfig::default();
    config.notifications.deliver = false;
    config.catalog.output_format = OutputFormat::Text;
    config.catalog.include_defaults = false;
    config.save(&path).unwrap();

    let loaded = ModelConfig::load_from(Some(&path)).unwrap();
    assert_eq!(loaded, config);
}
