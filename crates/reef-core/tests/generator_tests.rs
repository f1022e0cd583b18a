// Host-side tests for the particle field generator.

use glam::{Vec2, Vec3};
use rand::rngs::mock::StepRng;
use reef_core::constants::{CORAL, CYAN, DEEP_BLUE};
use reef_core::*;

/// RNG whose every `gen::<f32>()` returns (almost exactly) `value`.
fn fixed_roll(value: f64) -> StepRng {
    let bits = ((value * (1u64 << 24) as f64) as u64) << 8;
    StepRng::new(bits, 0)
}

fn field(count: usize) -> LayerConfig {
    let mut config = SceneConfig::drifting_field().layers.remove(0);
    config.count = count;
    config
}

#[test]
fn generates_requested_count() {
    let layer = ParticleLayer::from_seed(field(200), 7);
    assert_eq!(layer.len(), 200);
    assert_eq!(layer.colors().len(), 200);
    assert_eq!(layer.sizes().len(), 200);
    assert_eq!(layer.base_positions().len(), 200);
}

#[test]
fn zero_count_yields_empty_layer() {
    let layer = ParticleLayer::from_seed(field(0), 7);
    assert!(layer.is_empty());
    assert!(layer.colors().is_empty());
}

#[test]
fn positions_stay_within_extent() {
    let mut config = field(1000);
    config.extent = Vec2::new(8.0, 4.0);
    config.depth_rule = DepthRule::Jitter {
        offset: -3.0,
        jitter: 2.0,
    };
    let layer = ParticleLayer::from_seed(config, 11);
    for p in layer.positions() {
        assert!(p.x >= -4.0 && p.x <= 4.0, "x out of extent: {}", p.x);
        assert!(p.y >= -2.0 && p.y <= 2.0, "y out of extent: {}", p.y);
        assert!(p.z >= -4.0 && p.z <= -2.0, "z out of jitter range: {}", p.z);
    }
}

#[test]
fn fixed_depth_places_every_particle_at_offset() {
    let mut config = field(50);
    config.depth_rule = DepthRule::Fixed { offset: -15.0 };
    let layer = ParticleLayer::from_seed(config, 3);
    assert!(layer.positions().iter().all(|p| p.z == -15.0));
}

#[test]
fn base_positions_match_initial_positions() {
    let layer = ParticleLayer::from_seed(field(64), 5);
    assert_eq!(layer.positions(), layer.base_positions());
    assert!(layer.is_dirty());
}

#[test]
fn roll_of_095_picks_coral() {
    let mut rng = fixed_roll(0.95);
    let layer = generate(field(4), &mut rng);
    for c in layer.colors() {
        assert_eq!(*c, CORAL);
    }
}

#[test]
fn lower_rolls_pick_cyan_then_blue() {
    let layer = generate(field(1), &mut fixed_roll(0.6));
    assert_eq!(layer.colors()[0], CYAN);
    let layer = generate(field(1), &mut fixed_roll(0.2));
    assert_eq!(layer.colors()[0], DEEP_BLUE);
}

#[test]
fn palette_checks_highest_threshold_first() {
    let palette = Palette::bioluminescent();
    assert_eq!(palette.bucket_index(0.95), Some(0));
    assert_eq!(palette.bucket_index(0.9), Some(1)); // strictly greater
    assert_eq!(palette.bucket_index(0.51), Some(1));
    assert_eq!(palette.bucket_index(0.5), Some(2));
    assert_eq!(palette.bucket_index(0.0), Some(2));
    assert!(Palette { buckets: vec![] }.pick(0.5).is_none());
}

#[test]
fn bucket_size_overrides_layer_size() {
    let mut config = field(1);
    config.size = SizeRule::Constant(0.15);
    config.palette.buckets[0].size = Some(SizeRule::Constant(0.4));
    let coral = generate(config.clone(), &mut fixed_roll(0.95));
    assert_eq!(coral.sizes()[0], 0.4);
    let cyan = generate(config, &mut fixed_roll(0.6));
    assert_eq!(cyan.sizes()[0], 0.15);
}

#[test]
fn uniform_size_rule_scales_and_offsets_roll() {
    let mut config = field(1);
    config.size = SizeRule::Uniform { min: 0.1, span: 0.5 };
    let layer = generate(config, &mut fixed_roll(0.5));
    assert!((layer.sizes()[0] - 0.35).abs() < 1e-5);
}

#[test]
fn same_seed_reproduces_layer() {
    let a = ParticleLayer::from_seed(field(128), 42);
    let b = ParticleLayer::from_seed(field(128), 42);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());
    assert_eq!(a.sizes(), b.sizes());
    let c = ParticleLayer::from_seed(field(128), 43);
    assert_ne!(a.positions(), c.positions());
}

#[test]
fn palette_frequencies_follow_thresholds() {
    let layer = ParticleLayer::from_seed(field(8000), 9);
    let share = |color: Vec3| {
        layer.colors().iter().filter(|c| **c == color).count() as f32 / layer.len() as f32
    };
    assert!((share(CORAL) - 0.1).abs() < 0.03);
    assert!((share(CYAN) - 0.4).abs() < 0.03);
    assert!((share(DEEP_BLUE) - 0.5).abs() < 0.03);
}
