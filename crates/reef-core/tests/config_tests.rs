// Host-side tests for scene configuration loading and validation.

use glam::{Vec2, Vec3};
use reef_core::constants::BACKGROUND;
use reef_core::*;

#[test]
fn presets_are_valid() {
    assert!(SceneConfig::underwater().validate().is_ok());
    assert!(SceneConfig::drifting_field().validate().is_ok());
}

#[test]
fn json_round_trip_preserves_config() {
    for config in [SceneConfig::underwater(), SceneConfig::drifting_field()] {
        let json = config.to_json().expect("serialize");
        let back = SceneConfig::from_json(&json).expect("parse");
        assert_eq!(back, config);
    }
}

#[test]
fn reloaded_config_generates_the_same_field() {
    let config = SceneConfig::underwater();
    let json = config.to_json().expect("serialize");
    let reloaded = SceneConfig::from_json(&json).expect("parse");
    let a = Scene::new(config, 17);
    let b = Scene::new(reloaded, 17);
    for (la, lb) in a.layers().iter().zip(b.layers()) {
        assert_eq!(la.positions(), lb.positions());
        assert_eq!(la.colors(), lb.colors());
        assert_eq!(la.sizes(), lb.sizes());
    }
}

#[test]
fn minimal_json_fills_defaults() {
    let json = r#"{
        "camera": { "position": [0, 0, 5], "target": [0, 0, 0], "fov_degrees": 75, "near": 0.1, "far": 100 },
        "background": [0.02, 0.04, 0.08],
        "layers": [{
            "name": "dust",
            "depth": "mid",
            "count": 10,
            "extent": [4, 4],
            "depth_rule": { "fixed": { "offset": 0 } },
            "palette": { "buckets": [{ "name": "white", "threshold": -1, "color": [1, 1, 1] }] },
            "size": { "constant": 0.2 },
            "motion": "still"
        }]
    }"#;
    let config = SceneConfig::from_json(json).expect("parse");
    let layer = &config.layers[0];
    assert_eq!(layer.speed, SpeedVariation::default());
    assert_eq!(layer.material, Material::default());
    assert!(layer.interaction.is_none());
    assert!(config.rays.is_none());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SceneConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

fn first_layer() -> SceneConfig {
    SceneConfig::drifting_field()
}

#[test]
fn rejects_empty_palette() {
    let mut config = first_layer();
    config.layers[0].palette.buckets.clear();
    assert!(matches!(config.validate(), Err(ConfigError::InvalidLayer { .. })));
}

#[test]
fn rejects_unordered_thresholds() {
    let mut config = first_layer();
    config.layers[0].palette.buckets.swap(0, 2);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("field"), "{}", err);
}

#[test]
fn rejects_out_of_range_colors_and_opacity() {
    let mut config = first_layer();
    config.layers[0].palette.buckets[0].color = Vec3::new(1.2, 0.0, 0.0);
    assert!(config.validate().is_err());

    let mut config = first_layer();
    config.layers[0].material.opacity = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn rejects_bad_geometry() {
    let mut config = first_layer();
    config.layers[0].extent = Vec2::new(-1.0, 2.0);
    assert!(config.validate().is_err());

    let mut config = first_layer();
    config.layers[0].motion = Motion::Wrap {
        axes: [DriftAxis::NONE; 3],
        bounds: [Some(0.0), None, None],
    };
    assert!(config.validate().is_err());

    let mut config = SceneConfig::underwater();
    if let Some(i) = config.layers[2].interaction.as_mut() {
        i.radius = 0.0;
    }
    assert!(config.validate().is_err());
}

#[test]
fn rejects_pointer_interaction_without_float_motion() {
    let interaction = Interaction {
        radius: 3.0,
        strength: 0.6,
        pointer_scale: Vec2::new(10.0, 10.0),
        color_drift: None,
    };
    let mut config = first_layer();
    config.layers[0].interaction = Some(interaction);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("float"), "{}", err);

    config.layers[0].motion = Motion::Still;
    assert!(config.validate().is_err());
}

#[test]
fn background_hex_matches_constant() {
    let parsed = rgb_from_hex("#050a15").expect("hex");
    assert!((parsed - BACKGROUND).length() < 1e-6);
    assert_eq!(rgb_from_hex("ff8000").expect("hex"), Vec3::new(1.0, 128.0 / 255.0, 0.0));
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["#12345", "#gg0000", "", "#1234567", "#ééé"] {
        assert!(matches!(rgb_from_hex(bad), Err(ConfigError::BadHexColor(_))), "{}", bad);
    }
}

fn with_background(background: &str) -> String {
    let mut value = serde_json::to_value(SceneConfig::drifting_field()).expect("to_value");
    value["background"] = serde_json::from_str(background).expect("background literal");
    value.to_string()
}

#[test]
fn background_accepts_hex_or_rgb() {
    let hex = SceneConfig::from_json(&with_background(r##""#050a15""##)).expect("hex background");
    assert!((hex.background - BACKGROUND).length() < 1e-6);

    let rgb = SceneConfig::from_json(&with_background("[0.5, 0.25, 1.0]")).expect("rgb background");
    assert_eq!(rgb.background, Vec3::new(0.5, 0.25, 1.0));
}

#[test]
fn bad_hex_background_is_rejected() {
    let err = SceneConfig::from_json(&with_background(r##""#05zz15""##)).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().contains("#05zz15"), "{}", err);
}
