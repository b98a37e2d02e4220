//! Unit tests for CliConfig loading

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use triage_cli::CliConfig;
use triage_sdk::ArtifactFormat;

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let name = dir.path().join("absent");

    let config = CliConfig::load_from(&name.to_string_lossy()).unwrap();
    assert_eq!(config, CliConfig::default());
}

#[test]
fn test_toml_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("triage.toml"),
        r#"
source_path = "data/tokens.json"
artifact_path = "out/rules.json"
max_age = 17

[geometry]
category_min_x = 480.0
"#,
    )
    .unwrap();

    let name = dir.path().join("triage");
    let config = CliConfig::load_from(&name.to_string_lossy()).unwrap();

    assert_eq!(config.source_path, PathBuf::from("data/tokens.json"));
    assert_eq!(config.max_age, 17);
    assert_eq!(config.geometry.category_min_x, 480.0);
    assert_eq!(config.geometry.terminator_text, "No");
    assert_eq!(
        config.engine_config().repository.artifact_format(),
        ArtifactFormat::Json
    );
}

#[test]
fn test_yaml_config_file_with_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("triage.yaml"),
        "artifact_path: out/rules.txt\nformat: yaml\n",
    )
    .unwrap();

    let name = dir.path().join("triage");
    let config = CliConfig::load_from(&name.to_string_lossy()).unwrap();

    assert_eq!(config.format, Some(ArtifactFormat::Yaml));
    assert_eq!(config.source_path, PathBuf::from("spec/icts_tokens.json"));
}

#[test]
fn test_invalid_config_value_is_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("triage.toml"), "max_age = \"old\"\n").unwrap();

    let name = dir.path().join("triage");
    assert!(CliConfig::load_from(&name.to_string_lossy()).is_err());
}
