#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// StageConfig defaults
// =============================================================

#[test]
fn default_config_uses_constants() {
    let cfg = StageConfig::default();
    assert_eq!(cfg.width, DEFAULT_STAGE_WIDTH);
    assert_eq!(cfg.height, DEFAULT_STAGE_HEIGHT);
    assert_eq!(cfg.volume_color, Color::new(DEFAULT_VOLUME_COLOR));
    assert_eq!(cfg.origin_color, Color::new(DEFAULT_ORIGIN_COLOR));
    assert_eq!(cfg.volume_line_width, DEFAULT_VOLUME_LINE_WIDTH);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    let cfg = StageConfig::from_json("{}").unwrap();
    assert_eq!(cfg, StageConfig::default());
}

#[test]
fn from_json_overrides_fields() {
    let cfg = StageConfig::from_json(r##"{"width": 320, "height": 240, "volume_color": "#FFFFFF"}"##).unwrap();
    assert_eq!(cfg.width, 320);
    assert_eq!(cfg.height, 240);
    assert_eq!(cfg.volume_color.as_str(), "#FFFFFF");
    assert_eq!(cfg.origin_color.as_str(), DEFAULT_ORIGIN_COLOR);
}

#[test]
fn from_json_rejects_malformed() {
    let err = StageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_negative_dimension() {
    let err = StageConfig::from_json(r#"{"width": -5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_zero_dimension() {
    let err = StageConfig::from_json(r#"{"height": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDimension { name: "height", .. }));
}

#[test]
fn from_json_rejects_non_positive_line_width() {
    let err = StageConfig::from_json(r#"{"volume_line_width": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDimension { name: "volume_line_width", .. }));
}

// =============================================================
// from_vars
// =============================================================

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = StageConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg, StageConfig::default());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = StageConfig::from_vars(vars(&[
        ("STAGE_WIDTH", "1024"),
        ("STAGE_HEIGHT", " 768 "),
        ("STAGE_VOLUME_LINE_WIDTH", "2.5"),
    ]))
    .unwrap();
    assert_eq!(cfg.width, 1024);
    assert_eq!(cfg.height, 768);
    assert_eq!(cfg.volume_line_width, 2.5);
}

#[test]
fn from_vars_unparsable_falls_back_to_default() {
    let cfg = StageConfig::from_vars(vars(&[("STAGE_WIDTH", "wide"), ("STAGE_VOLUME_LINE_WIDTH", "thick")])).unwrap();
    assert_eq!(cfg.width, DEFAULT_STAGE_WIDTH);
    assert_eq!(cfg.volume_line_width, DEFAULT_VOLUME_LINE_WIDTH);
}

#[test]
fn from_vars_rejects_zero_and_negative() {
    let err = StageConfig::from_vars(vars(&[("STAGE_WIDTH", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDimension { name: "STAGE_WIDTH", .. }));

    let err = StageConfig::from_vars(vars(&[("STAGE_HEIGHT", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDimension { name: "STAGE_HEIGHT", .. }));
}

#[test]
fn from_vars_rejects_negative_line_width() {
    let err = StageConfig::from_vars(vars(&[("STAGE_VOLUME_LINE_WIDTH", "-2")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDimension { name: "volume_line_width", .. }));
}

#[test]
fn invalid_dimension_message_names_field() {
    let err = ConfigError::InvalidDimension { name: "width", value: "0".into() };
    assert_eq!(err.to_string(), "invalid stage dimension width: 0");
}

// =============================================================
// Stage
// =============================================================

#[test]
fn stage_exposes_dimensions() {
    let stage = Stage::new(StageConfig { width: 64, height: 32, ..StageConfig::default() });
    assert_eq!(stage.width(), 64);
    assert_eq!(stage.height(), 32);
    assert_eq!(stage.config().width, 64);
}

#[test]
fn stage_clamp_keeps_point_on_grid() {
    let stage = Stage::new(StageConfig { width: 64, height: 32, ..StageConfig::default() });
    let mut p = Point::new(100.0, -4.0);
    stage.clamp(&mut p);
    assert_eq!(p, Point::new(63.0, 0.0));
}

#[test]
fn stage_clamp_leaves_inner_point() {
    let stage = Stage::default();
    let mut p = Point::new(10.5, 20.25);
    stage.clamp(&mut p);
    assert_eq!(p, Point::new(10.5, 20.25));
}
