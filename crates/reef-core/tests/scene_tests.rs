// Host-side tests for scene assembly and the per-frame tick.

use glam::Vec2;
use instant::{Duration, Instant};
use reef_core::*;

fn names_in_draw_order(scene: &Scene) -> Vec<String> {
    scene
        .draw_order()
        .map(|item| match item {
            DrawItem::Particles { layer, .. } => layer.name().to_string(),
            DrawItem::Rays(_) => "rays".to_string(),
        })
        .collect()
}

fn layer_indices_in_draw_order(scene: &Scene) -> Vec<Option<usize>> {
    scene
        .draw_order()
        .map(|item| match item {
            DrawItem::Particles { index, .. } => Some(index),
            DrawItem::Rays(_) => None,
        })
        .collect()
}

#[test]
fn underwater_scene_draws_rays_between_background_and_mid() {
    let scene = Scene::new(SceneConfig::underwater(), 1);
    assert_eq!(
        names_in_draw_order(&scene),
        ["deep", "plankton", "rays", "glow", "bubbles"]
    );
    assert_eq!(
        layer_indices_in_draw_order(&scene),
        [Some(0), Some(1), None, Some(2), Some(3)]
    );
}

#[test]
fn draw_order_sorts_by_depth_not_config_order() {
    let mut config = SceneConfig::underwater();
    config.layers.reverse();
    let scene = Scene::new(config, 1);
    assert_eq!(
        names_in_draw_order(&scene),
        ["plankton", "deep", "rays", "glow", "bubbles"]
    );
    assert_eq!(
        layer_indices_in_draw_order(&scene),
        [Some(2), Some(3), None, Some(1), Some(0)]
    );
}

#[test]
fn scene_without_rays_has_no_ray_slot() {
    let scene = Scene::new(SceneConfig::drifting_field(), 1);
    assert!(scene.rays().is_none());
    assert_eq!(layer_indices_in_draw_order(&scene), [Some(0)]);
}

#[test]
fn layers_are_generated_with_configured_counts() {
    let scene = Scene::new(SceneConfig::underwater(), 2);
    let counts: Vec<usize> = scene.layers().iter().map(|l| l.len()).collect();
    assert_eq!(counts, [300, 200, 150, 40]);
    assert!(scene.layer("glow").is_some());
    assert!(scene.layer("missing").is_none());
}

#[test]
fn same_seed_builds_identical_scenes() {
    let a = Scene::new(SceneConfig::underwater(), 99);
    let b = Scene::new(SceneConfig::underwater(), 99);
    for (la, lb) in a.layers().iter().zip(b.layers()) {
        assert_eq!(la.positions(), lb.positions());
        assert_eq!(la.colors(), lb.colors());
    }
    // Layers draw from independent streams.
    assert_ne!(a.layers()[0].sizes()[..10], a.layers()[1].sizes()[..10]);
}

#[test]
fn tick_advances_every_layer_and_ray_time() {
    let mut scene = Scene::new(SceneConfig::underwater(), 3);
    for layer in scene.layers_mut() {
        layer.mark_clean();
    }
    scene.tick_elapsed(2.5, Vec2::ZERO);
    assert!(scene.layers().iter().all(|l| l.is_dirty()));
    assert_eq!(scene.rays().map(|r| r.time), Some(2.5));
    assert_eq!(scene.elapsed(), 2.5);
    assert_eq!(scene.frame_count(), 1);
}

#[test]
fn pointer_reaches_only_interactive_layers() {
    let mut near = Scene::new(SceneConfig::underwater(), 4);
    let mut far = Scene::new(SceneConfig::underwater(), 4);
    near.tick_elapsed(1.0, Vec2::ZERO);
    far.tick_elapsed(1.0, Vec2::new(50.0, 50.0));

    for name in ["deep", "plankton", "bubbles"] {
        let a = near.layer(name).expect("layer");
        let b = far.layer(name).expect("layer");
        assert_eq!(a.positions(), b.positions(), "{} saw the pointer", name);
    }
    let a = near.layer("glow").expect("glow");
    let b = far.layer("glow").expect("glow");
    assert_ne!(a.positions(), b.positions());
}

#[test]
fn tick_reads_time_from_scene_clock() {
    let start = Instant::now();
    let mut scene = Scene::with_clock(SceneConfig::drifting_field(), 5, SceneClock::started_at(start));
    scene.tick(start + Duration::from_millis(2000), Vec2::ZERO);
    assert!((scene.elapsed() - 2.0).abs() < 1e-4);
    let field = scene.layer("field").expect("field");
    assert!((field.rotation_y - 0.1).abs() < 1e-5);
}

#[test]
fn clock_never_reads_negative() {
    let start = Instant::now() + Duration::from_secs(10);
    let clock = SceneClock::started_at(start);
    assert_eq!(clock.elapsed_at(Instant::now()), 0.0);
}

#[test]
fn empty_layer_is_harmless() {
    let mut config = SceneConfig::underwater();
    config.layers[3].count = 0;
    let mut scene = Scene::new(config, 6);
    scene.tick_elapsed(1.0, Vec2::new(0.2, -0.3));
    assert!(scene.layer("bubbles").map(|l| l.is_empty()).unwrap_or(false));
}

#[test]
fn camera_matches_configured_view() {
    let scene = Scene::new(SceneConfig::underwater(), 7);
    let camera = scene.camera(16.0 / 9.0);
    assert_eq!(camera.eye.z, 5.0);
    assert!((camera.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    let (right, up) = camera.billboard_axes();
    assert!((right - glam::Vec3::X).length() < 1e-5);
    assert!((up - glam::Vec3::Y).length() < 1e-5);
}
