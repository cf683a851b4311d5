use crate::conf::{ConfigError, FrameStyle, SporelogConfig, load_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn loads_partial_file_over_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("sporelog.toml");
    fs::write(
        &path,
        r#"
[logs]
air = "/srv/farm/air_data.log"

[frames]
font_px = 42
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(Some(&path)).unwrap();

    // Assert
    assert_eq!(cfg.logs.air, PathBuf::from("/srv/farm/air_data.log"));
    assert_eq!(
        cfg.logs.monitor,
        PathBuf::from("/media/asustor/MushroomFarm/data/monitor.log")
    );
    assert_eq!(cfg.frames.font_px, 42);
    assert_eq!(cfg.frames.line_spacing, FrameStyle::default().line_spacing);
    assert_eq!(cfg.graph, SporelogConfig::default().graph);
}

#[test]
fn empty_file_yields_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("sporelog.toml");
    fs::write(&path, "").unwrap();

    // Act
    let cfg = load_config(Some(&path)).unwrap();

    // Assert
    assert_eq!(cfg, SporelogConfig::default());
}

#[test]
fn explicit_missing_file_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    // Act
    let err = load_config(Some(&path)).unwrap_err();

    // Assert
    match err {
        ConfigError::ReadFile { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("sporelog.toml");
    fs::write(&path, "[logs]\nair_log = \"x\"\n").unwrap();

    // Act
    let err = load_config(Some(&path)).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn invalid_values_fail_validation() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("sporelog.toml");
    fs::write(&path, "[frames]\njpeg_quality = 0\n").unwrap();

    // Act
    let err = load_config(Some(&path)).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidFrameStyle { .. }));
}

#[test]
fn zero_sized_graph_is_rejected() {
    // Arrange
    let mut cfg = SporelogConfig::default();
    cfg.graph.height = 0;

    // Act
    let err = cfg.validate().unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidGraph { .. }));
}
