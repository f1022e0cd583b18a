//! Built-in scene configurations.

use crate::config::*;
use crate::constants::*;
use glam::{Vec2, Vec3};

fn bucket(name: &str, threshold: f32, color: Vec3) -> ColorBucket {
    ColorBucket {
        name: name.to_string(),
        threshold,
        color,
        size: None,
    }
}

impl Palette {
    /// Coral accents over cyan and deep blue: `> 0.9` coral, `> 0.5` cyan,
    /// otherwise blue.
    pub fn bioluminescent() -> Self {
        Self {
            buckets: vec![
                bucket("coral", CORAL_THRESHOLD, CORAL),
                bucket("cyan", CYAN_THRESHOLD, CYAN),
                bucket("deep_blue", FALLBACK_THRESHOLD, DEEP_BLUE),
            ],
        }
    }
}

impl CameraConfig {
    pub fn underwater() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            fov_degrees: CAMERA_FOV_DEG,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl RayConfig {
    pub fn underwater() -> Self {
        Self {
            bands: [
                RayBand {
                    direction: Vec2::new(1.0, 0.35),
                    frequency: 9.0,
                    speed: 0.3,
                    offset: 0.0,
                    weight: 0.5,
                },
                RayBand {
                    direction: Vec2::new(0.8, -0.2),
                    frequency: 14.0,
                    speed: -0.22,
                    offset: 1.7,
                    weight: 0.3,
                },
                RayBand {
                    direction: Vec2::new(1.2, 0.5),
                    frequency: 6.0,
                    speed: 0.15,
                    offset: 3.1,
                    weight: 0.2,
                },
            ],
            band_edges: Vec2::new(0.2, 0.9),
            vertical_fade: Vec2::new(0.2, 1.0),
            edge_fade: 0.15,
            tint: RAY_TINT,
            dimming: RAY_DIMMING,
        }
    }
}

impl SceneConfig {
    /// Four particle layers plus the light-ray overlay.
    pub fn underwater() -> Self {
        Self {
            camera: CameraConfig::underwater(),
            background: BACKGROUND,
            layers: vec![deep_layer(), plankton_layer(), glow_layer(), bubble_layer()],
            rays: Some(RayConfig::underwater()),
        }
    }

    /// A single wrapping field that slowly rotates, no rays.
    pub fn drifting_field() -> Self {
        let mut field = plankton_layer();
        field.name = "field".to_string();
        field.size = SizeRule::Constant(0.15);
        field.material.size = 1.0;
        field.rotation_rate = Some(0.05);
        Self {
            camera: CameraConfig::underwater(),
            background: BACKGROUND,
            layers: vec![field],
            rays: None,
        }
    }
}

fn deep_layer() -> LayerConfig {
    LayerConfig {
        name: "deep".to_string(),
        depth: LayerDepth::Background,
        count: 300,
        extent: Vec2::new(40.0, 30.0),
        depth_rule: DepthRule::Fixed { offset: -15.0 },
        palette: Palette {
            buckets: vec![
                bucket("cyan", 0.7, CYAN),
                bucket("deep_blue", FALLBACK_THRESHOLD, DEEP_BLUE),
            ],
        },
        size: SizeRule::Uniform {
            min: 0.05,
            span: 0.1,
        },
        speed: SpeedVariation {
            base: 1.0,
            modulus: 5,
            increment: 0.1,
        },
        motion: Motion::Float {
            axes: [
                FloatAxis {
                    wave: Wave::Sin,
                    amplitude: 0.3,
                    speed: 0.1,
                    phase: 0.7,
                },
                FloatAxis {
                    wave: Wave::Cos,
                    amplitude: 0.3,
                    speed: 0.15,
                    phase: 1.3,
                },
                FloatAxis::NONE,
            ],
        },
        rotation_rate: None,
        interaction: None,
        material: Material {
            opacity: 0.4,
            ..Material::default()
        },
    }
}

fn plankton_layer() -> LayerConfig {
    LayerConfig {
        name: "plankton".to_string(),
        depth: LayerDepth::Background,
        count: 200,
        extent: Vec2::new(20.0, 20.0),
        depth_rule: DepthRule::Uniform { extent: 20.0 },
        palette: Palette::bioluminescent(),
        size: SizeRule::Uniform { min: 0.1, span: 0.5 },
        speed: SpeedVariation::default(),
        motion: Motion::Wrap {
            axes: [
                DriftAxis {
                    wave: Wave::Cos,
                    rate: 0.5,
                    phase: 1.0,
                    step: 0.0005,
                },
                DriftAxis {
                    wave: Wave::Sin,
                    rate: 1.0,
                    phase: 1.0,
                    step: 0.001,
                },
                DriftAxis::NONE,
            ],
            bounds: [Some(10.0), Some(10.0), None],
        },
        rotation_rate: None,
        interaction: None,
        material: Material {
            opacity: 0.8,
            size: 0.3,
            ..Material::default()
        },
    }
}

fn glow_layer() -> LayerConfig {
    let mut palette = Palette {
        buckets: vec![
            bucket("coral", CORAL_THRESHOLD, CORAL),
            bucket("cyan", CYAN_THRESHOLD, CYAN),
            bucket("ocean_blue", FALLBACK_THRESHOLD, OCEAN_BLUE),
        ],
    };
    palette.buckets[0].size = Some(SizeRule::Uniform {
        min: 0.15,
        span: 0.2,
    });
    LayerConfig {
        name: "glow".to_string(),
        depth: LayerDepth::Mid,
        count: 150,
        extent: Vec2::new(14.0, 10.0),
        depth_rule: DepthRule::Jitter {
            offset: 0.0,
            jitter: 4.0,
        },
        palette,
        size: SizeRule::Uniform {
            min: 0.05,
            span: 0.15,
        },
        speed: SpeedVariation {
            base: 0.8,
            modulus: 7,
            increment: 0.05,
        },
        motion: Motion::Float {
            axes: [
                FloatAxis {
                    wave: Wave::Sin,
                    amplitude: 0.4,
                    speed: 0.3,
                    phase: 0.5,
                },
                FloatAxis {
                    wave: Wave::Cos,
                    amplitude: 0.3,
                    speed: 0.4,
                    phase: 0.3,
                },
                FloatAxis {
                    wave: Wave::Sin,
                    amplitude: 0.2,
                    speed: 0.2,
                    phase: 0.9,
                },
            ],
        },
        rotation_rate: None,
        interaction: Some(Interaction {
            radius: 1.5,
            strength: 0.6,
            pointer_scale: Vec2::new(7.0, 5.0),
            color_drift: Some(ColorDrift {
                rate: 0.1,
                red_gain: 0.0005,
                green_gain: 0.0003,
            }),
        }),
        material: Material {
            opacity: 0.9,
            ..Material::default()
        },
    }
}

fn bubble_layer() -> LayerConfig {
    LayerConfig {
        name: "bubbles".to_string(),
        depth: LayerDepth::Foreground,
        count: 40,
        extent: Vec2::new(12.0, 8.0),
        depth_rule: DepthRule::Jitter {
            offset: 2.5,
            jitter: 1.5,
        },
        palette: Palette {
            buckets: vec![
                bucket("cyan", 0.5, CYAN),
                bucket("pale", FALLBACK_THRESHOLD, Vec3::new(0.8, 0.95, 1.0)),
            ],
        },
        size: SizeRule::Uniform {
            min: 0.1,
            span: 0.15,
        },
        speed: SpeedVariation {
            base: 1.0,
            modulus: 3,
            increment: 0.2,
        },
        motion: Motion::Float {
            axes: [
                FloatAxis {
                    wave: Wave::Sin,
                    amplitude: 0.15,
                    speed: 0.2,
                    phase: 1.1,
                },
                FloatAxis {
                    wave: Wave::Sin,
                    amplitude: 0.5,
                    speed: 0.15,
                    phase: 0.6,
                },
                FloatAxis::NONE,
            ],
        },
        rotation_rate: None,
        interaction: None,
        material: Material {
            opacity: 0.35,
            ..Material::default()
        },
    }
}
