//! Configuration parsing and validation tests

use head_direction::config::{Config, EXAMPLE_CONFIG};
use std::fs;
use std::path::PathBuf;

/// Write an empty placeholder model so path validation can pass
fn placeholder_model(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("head_direction_{name}.onnx"));
    fs::write(&path, b"").unwrap();
    path
}

#[test]
fn test_example_config_matches_defaults() {
    let parsed: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
    let defaults = Config::default();

    assert_eq!(parsed.detector.model_path, defaults.detector.model_path);
    assert_eq!(
        parsed.detector.input_resolution.width,
        defaults.detector.input_resolution.width
    );
    assert_eq!(
        parsed.detector.input_resolution.height,
        defaults.detector.input_resolution.height
    );
    assert_eq!(parsed.detector.scale, defaults.detector.scale);
    assert_eq!(parsed.detector.min_face_score, defaults.detector.min_face_score);
    assert_eq!(parsed.video.camera_index, defaults.video.camera_index);
    assert_eq!(parsed.video.video_file, defaults.video.video_file);
    assert_eq!(
        parsed.tracking.tick_interval_ms,
        defaults.tracking.tick_interval_ms
    );
    assert_eq!(parsed.display.window_name, defaults.display.window_name);
    assert_eq!(parsed.display.marker_radius, defaults.display.marker_radius);
    assert_eq!(parsed.display.headless, defaults.display.headless);
}

#[test]
fn test_partial_config_fills_defaults() {
    let parsed: Config = serde_yaml::from_str("tracking:\n  tick_interval_ms: 250\n").unwrap();
    assert_eq!(parsed.tracking.tick_interval_ms, 250);
    assert_eq!(parsed.video.camera_index, 0);
    assert_eq!(parsed.display.window_name, "Head Direction");
}

#[test]
fn test_validate_accepts_well_formed_config() {
    let mut config = Config::default();
    config.detector.model_path = placeholder_model("valid");
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_interval() {
    let mut config = Config::default();
    config.detector.model_path = placeholder_model("interval");
    config.tracking.tick_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_out_of_range_scale() {
    let mut config = Config::default();
    config.detector.model_path = placeholder_model("scale");

    config.detector.scale = 0.0;
    assert!(config.validate().is_err());

    config.detector.scale = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_out_of_range_score() {
    let mut config = Config::default();
    config.detector.model_path = placeholder_model("score");
    config.detector.min_face_score = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_missing_model() {
    let mut config = Config::default();
    config.detector.model_path = PathBuf::from("/nonexistent/face_mesh.onnx");
    assert!(config.validate().is_err());
}

#[test]
fn test_config_round_trip() {
    let mut config = Config::default();
    config.tracking.tick_interval_ms = 42;
    config.display.headless = true;

    let path = std::env::temp_dir().join("head_direction_round_trip.yaml");
    config.to_file(&path).unwrap();
    let reloaded = Config::from_file(&path).unwrap();

    assert_eq!(reloaded.tracking.tick_interval_ms, 42);
    assert!(reloaded.display.headless);
}
