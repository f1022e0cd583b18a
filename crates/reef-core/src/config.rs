//! Static scene and layer configuration.
//!
//! Everything here is plain data loaded once at startup (either from one of
//! the presets in [`crate::presets`] or from JSON) and never mutated by the
//! animation. Validation happens on load so the generator and animator can
//! stay infallible.

use crate::error::ConfigError;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Deserializer, Serialize};

/// Draw-order class of a layer. Layers are drawn back to front:
/// background, then the ray overlay, then mid, then foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerDepth {
    Background,
    Mid,
    Foreground,
}

/// Rule used to sample the z coordinate of a new particle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthRule {
    /// Uniform in `[-extent/2, extent/2]`.
    Uniform { extent: f32 },
    /// `offset` plus uniform jitter in `[-jitter/2, jitter/2]`.
    Jitter { offset: f32, jitter: f32 },
    /// Every particle sits at `offset` (typically behind the camera focus).
    Fixed { offset: f32 },
}

/// Per-particle size rule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeRule {
    Constant(f32),
    /// `min + roll * span` with roll uniform in `[0, 1)`.
    Uniform { min: f32, span: f32 },
}

impl SizeRule {
    pub fn sample(&self, roll: f32) -> f32 {
        match *self {
            SizeRule::Constant(size) => size,
            SizeRule::Uniform { min, span } => min + roll * span,
        }
    }
}

/// One discrete color choice in a palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorBucket {
    pub name: String,
    /// The bucket is chosen when the roll is strictly greater than this.
    pub threshold: f32,
    pub color: Vec3,
    /// Overrides the layer size rule for particles in this bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeRule>,
}

/// Ordered set of thresholded color buckets, highest threshold first.
///
/// The last bucket acts as the fallback and should carry a threshold below
/// any possible roll (e.g. `-1.0` or `0.0`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub buckets: Vec<ColorBucket>,
}

impl Palette {
    /// Index of the bucket selected by `roll`, `None` for an empty palette.
    pub fn bucket_index(&self, roll: f32) -> Option<usize> {
        if self.buckets.is_empty() {
            return None;
        }
        Some(
            self.buckets
                .iter()
                .position(|b| roll > b.threshold)
                .unwrap_or(self.buckets.len() - 1),
        )
    }

    pub fn pick(&self, roll: f32) -> Option<&ColorBucket> {
        self.bucket_index(roll).map(|i| &self.buckets[i])
    }
}

/// Deterministic per-particle speed: `base + (index % modulus) * increment`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedVariation {
    pub base: f32,
    pub modulus: u32,
    pub increment: f32,
}

impl Default for SpeedVariation {
    fn default() -> Self {
        Self {
            base: 1.0,
            modulus: 1,
            increment: 0.0,
        }
    }
}

impl SpeedVariation {
    #[inline]
    pub fn for_index(&self, index: usize) -> f32 {
        let k = self.modulus.max(1) as usize;
        self.base + (index % k) as f32 * self.increment
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wave {
    #[default]
    Sin,
    Cos,
}

impl Wave {
    #[inline]
    pub fn eval(self, x: f32) -> f32 {
        match self {
            Wave::Sin => x.sin(),
            Wave::Cos => x.cos(),
        }
    }
}

/// Bounded oscillation of one axis around the particle's anchor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatAxis {
    #[serde(default)]
    pub wave: Wave,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
}

impl FloatAxis {
    pub const NONE: Self = Self {
        wave: Wave::Sin,
        amplitude: 0.0,
        speed: 0.0,
        phase: 0.0,
    };
}

/// Per-frame increment of one axis for wrapping layers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriftAxis {
    #[serde(default)]
    pub wave: Wave,
    pub rate: f32,
    pub phase: f32,
    pub step: f32,
}

impl DriftAxis {
    pub const NONE: Self = Self {
        wave: Wave::Sin,
        rate: 0.0,
        phase: 0.0,
        step: 0.0,
    };
}

/// How a layer's particles move each frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Absolute position recomputed from the anchor every frame.
    Float { axes: [FloatAxis; 3] },
    /// Incremental drift with a hard reset to the opposite bound. Axes whose
    /// bound is `None` drift unconstrained.
    Wrap {
        axes: [DriftAxis; 3],
        bounds: [Option<f32>; 3],
    },
    Still,
}

/// Slow global hue shift applied to interactive layers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorDrift {
    pub rate: f32,
    pub red_gain: f32,
    pub green_gain: f32,
}

/// Pointer interaction of a layer. Only layers carrying this receive the
/// pointer at tick time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub radius: f32,
    pub strength: f32,
    /// Scales the normalized pointer (`[-1, 1]` per axis) into world units.
    pub pointer_scale: Vec2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_drift: Option<ColorDrift>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blending {
    #[default]
    Additive,
    Alpha,
}

/// Draw parameters handed to the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub opacity: f32,
    #[serde(default)]
    pub blending: Blending,
    /// Multiplies every particle size at draw time.
    pub size: f32,
    pub size_attenuation: bool,
    /// Use the soft circular sprite instead of a hard disc.
    pub sprite: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            opacity: 0.8,
            blending: Blending::Additive,
            size: 1.0,
            size_attenuation: true,
            sprite: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub name: String,
    pub depth: LayerDepth,
    pub count: usize,
    /// Spatial extent along x and y; positions are sampled in `[-e/2, e/2]`.
    pub extent: Vec2,
    pub depth_rule: DepthRule,
    pub palette: Palette,
    pub size: SizeRule,
    #[serde(default)]
    pub speed: SpeedVariation,
    pub motion: Motion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_rate: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    #[serde(default)]
    pub material: Material,
}

impl LayerConfig {
    pub fn is_interactive(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.name.as_str();
        if self.palette.buckets.is_empty() {
            return Err(ConfigError::layer(name, "palette has no buckets"));
        }
        if self
            .palette
            .buckets
            .windows(2)
            .any(|w| w[0].threshold < w[1].threshold)
        {
            return Err(ConfigError::layer(
                name,
                "palette thresholds must be ordered highest first",
            ));
        }
        if self
            .palette
            .buckets
            .iter()
            .any(|b| b.color.min_element() < 0.0 || b.color.max_element() > 1.0)
        {
            return Err(ConfigError::layer(name, "palette colors must be within [0, 1]"));
        }
        if self.extent.min_element() < 0.0 {
            return Err(ConfigError::layer(name, "extent must be non-negative"));
        }
        if let Motion::Wrap { bounds, .. } = &self.motion {
            if bounds.iter().flatten().any(|b| *b <= 0.0) {
                return Err(ConfigError::layer(name, "wrap bounds must be positive"));
            }
        }
        if let Some(i) = &self.interaction {
            if i.radius <= 0.0 {
                return Err(ConfigError::layer(name, "repulsion radius must be positive"));
            }
            if !matches!(self.motion, Motion::Float { .. }) {
                return Err(ConfigError::layer(name, "pointer interaction requires float motion"));
            }
        }
        if !(0.0..=1.0).contains(&self.material.opacity) {
            return Err(ConfigError::layer(name, "opacity must be within [0, 1]"));
        }
        Ok(())
    }
}

/// One periodic band of the ray overlay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayBand {
    /// Coefficients applied to `uv.x` and `uv.y` before the frequency.
    pub direction: Vec2,
    pub frequency: f32,
    /// Time multiplier of the phase.
    pub speed: f32,
    pub offset: f32,
    pub weight: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayConfig {
    pub bands: [RayBand; 3],
    /// Smoothstep edges turning each sine into a band.
    pub band_edges: Vec2,
    /// Vertical fade: fully visible below `x`, gone at `y` and above.
    pub vertical_fade: Vec2,
    /// Width of the horizontal fade at each side, in uv units.
    pub edge_fade: f32,
    pub tint: Vec3,
    pub dimming: f32,
}

impl RayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.band_edges.x >= self.band_edges.y {
            return Err(ConfigError::InvalidRays("band edges must be increasing".into()));
        }
        if self.vertical_fade.x >= self.vertical_fade.y || self.vertical_fade.y > 1.0 {
            return Err(ConfigError::InvalidRays(
                "vertical fade must be increasing and end at or below 1".into(),
            ));
        }
        if self.edge_fade <= 0.0 || self.edge_fade > 0.5 {
            return Err(ConfigError::InvalidRays("edge fade must be within (0, 0.5]".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    /// Clear color. Accepts `[r, g, b]` or a `"#rrggbb"` string.
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Vec3,
    pub layers: Vec<LayerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rays: Option<RayConfig>,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for layer in &self.layers {
            layer.validate()?;
        }
        if let Some(rays) = &self.rays {
            rays.validate()?;
        }
        Ok(())
    }
}

/// Parse a `#rrggbb` color into `[0, 1]` components.
pub fn rgb_from_hex(hex: &str) -> Result<Vec3, ConfigError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ConfigError::BadHexColor(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| ConfigError::BadHexColor(hex.to_string()))
    };
    Ok(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Rgb(Vec3),
}

fn deserialize_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
    match ColorRepr::deserialize(deserializer)? {
        ColorRepr::Hex(hex) => rgb_from_hex(&hex).map_err(serde::de::Error::custom),
        ColorRepr::Rgb(rgb) => Ok(rgb),
    }
}
