//! Content domain: tests for runner config parsing and sanitizing.

use super::{RunnerConfig, parse_runner_config};
use crate::suspension::SuspensionTuning;

#[test]
fn test_partial_config_uses_defaults() {
    let config = parse_runner_config("(fixed_hz: 120.0)", "inline").unwrap();

    assert_eq!(config.fixed_hz, 120.0);
    assert_eq!(config.movement.move_speed, RunnerConfig::default().movement.move_speed);
    assert_eq!(config.suspension.countdown_from, 3);
}

#[test]
fn test_nested_section_partial_override() {
    let config = parse_runner_config(
        "(movement: (move_speed: 300.0), camera: (min_center_x: -100.0))",
        "inline",
    )
    .unwrap();

    assert_eq!(config.movement.move_speed, 300.0);
    assert_eq!(config.movement.launch_velocity, 520.0);
    // IMPLICIT_SOME lets optional limits be written bare
    assert_eq!(config.camera.min_center_x, Some(-100.0));
    assert_eq!(config.camera.max_center_x, None);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_runner_config("(fixed_hz: \"fast\")", "runner.ron").unwrap_err();

    assert_eq!(err.file, "runner.ron");
    assert!(err.to_string().starts_with("Failed to load runner.ron"));
}

#[test]
fn test_sanitize_clamps_invalid_tunables() {
    let mut config = RunnerConfig::default();
    config.fixed_hz = 0.0;
    config.movement.move_speed = -5.0;
    config.suspension = SuspensionTuning {
        soft_landing_multiplier: 4.0,
        soft_landing_duration: -1.0,
        resume_ignore_input: -0.5,
        ..SuspensionTuning::default()
    };
    config.camera.smoothing_time = -0.2;

    let config = config.sanitized();

    assert_eq!(config.fixed_hz, 60.0);
    assert_eq!(config.movement.move_speed, 260.0);
    assert_eq!(config.suspension.soft_landing_multiplier, 1.0);
    assert_eq!(config.suspension.soft_landing_duration, 0.0);
    assert_eq!(config.suspension.resume_ignore_input, 0.0);
    assert_eq!(config.camera.smoothing_time, 0.0);
}

#[test]
fn test_sanitize_floors_tiny_multiplier() {
    let mut config = RunnerConfig::default();
    config.suspension.soft_landing_multiplier = 0.0;

    let config = config.sanitized();

    assert_eq!(config.suspension.soft_landing_multiplier, 0.05);
}

#[test]
fn test_shipped_config_parses() {
    let contents = include_str!("../../assets/data/runner.ron");
    let config = parse_runner_config(contents, "runner.ron").unwrap().sanitized();

    assert_eq!(config.schema_version, 1);
    assert!(config.movement.camera_relative_ceiling);
    assert!(config.suspension.soft_landing_multiplier < 1.0);
}
