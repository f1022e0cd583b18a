//! Light-ray overlay.
//!
//! [`shade_fragment`] is the CPU reference of the `rays.wgsl` fragment stage
//! in `reef-render`; both read the same [`RayConfig`] so they stay in step.
//! The overlay is additive and never writes depth.

use crate::config::{RayBand, RayConfig};
use glam::{Vec2, Vec4};

/// GLSL/WGSL-style smoothstep.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn band(b: &RayBand, edges: Vec2, uv: Vec2, time: f32) -> f32 {
    let x = uv.dot(b.direction) * b.frequency + time * b.speed + b.offset;
    smoothstep(edges.x, edges.y, x.sin())
}

/// Weighted sum of the inverted bands, before any masking.
pub fn ray_intensity(config: &RayConfig, uv: Vec2, time: f32) -> f32 {
    config
        .bands
        .iter()
        .map(|b| b.weight * (1.0 - band(b, config.band_edges, uv, time)))
        .sum()
}

/// Fade toward the top of the overlay; zero at `uv.y >= vertical_fade.y`.
#[inline]
pub fn vertical_mask(config: &RayConfig, uv: Vec2) -> f32 {
    1.0 - smoothstep(config.vertical_fade.x, config.vertical_fade.y, uv.y)
}

/// Fade at the left and right edges; zero at `uv.x = 0` and `uv.x = 1`.
#[inline]
pub fn edge_mask(config: &RayConfig, uv: Vec2) -> f32 {
    let w = config.edge_fade;
    smoothstep(0.0, w, uv.x) * (1.0 - smoothstep(1.0 - w, 1.0, uv.x))
}

/// Color and alpha of the overlay at screen-space `uv` (origin bottom-left).
pub fn shade_fragment(config: &RayConfig, uv: Vec2, time: f32) -> Vec4 {
    let alpha = ray_intensity(config, uv, time)
        * vertical_mask(config, uv)
        * edge_mask(config, uv)
        * config.dimming;
    config.tint.extend(alpha)
}

/// Ray overlay instance owned by the scene. Only the time uniform changes
/// from frame to frame.
#[derive(Clone, Debug)]
pub struct RayOverlay {
    pub config: RayConfig,
    pub time: f32,
}

impl RayOverlay {
    pub fn new(config: RayConfig) -> Self {
        Self { config, time: 0.0 }
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn shade(&self, uv: Vec2) -> Vec4 {
        shade_fragment(&self.config, uv, self.time)
    }
}
