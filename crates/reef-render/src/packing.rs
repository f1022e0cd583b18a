//! CPU-side layouts of everything uploaded to the GPU. No device access
//! here, so the packing can be tested on the host.

use glam::{Mat4, Vec3};
use reef_core::{Blending, Camera, ParticleLayer, RayOverlay};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub right: [f32; 4],
    pub up: [f32; 4],
    /// Surface width and height in pixels.
    pub viewport: [f32; 4],
}

impl CameraUniforms {
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let (right, up) = camera.billboard_axes();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            right: right.extend(0.0).to_array(),
            up: up.extend(0.0).to_array(),
            viewport: [width.max(1) as f32, height.max(1) as f32, 0.0, 0.0],
        }
    }
}

/// One particle as read by the instanced quad pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Refill `out` with the layer's current attributes.
pub fn pack_instances(layer: &ParticleLayer, out: &mut Vec<ParticleInstance>) {
    out.clear();
    out.extend(
        layer
            .positions()
            .iter()
            .zip(layer.colors())
            .zip(layer.sizes())
            .map(|((p, c), s)| ParticleInstance {
                pos: p.to_array(),
                size: *s,
                color: c.to_array(),
                _pad: 0.0,
            }),
    );
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LayerUniforms {
    pub model: [[f32; 4]; 4],
    /// opacity, size multiplier, size attenuation flag, sprite flag
    pub params: [f32; 4],
}

impl LayerUniforms {
    pub fn new(layer: &ParticleLayer) -> Self {
        let m = &layer.config.material;
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        Self {
            model: Mat4::from_rotation_y(layer.rotation_y).to_cols_array_2d(),
            params: [m.opacity, m.size, flag(m.size_attenuation), flag(m.sprite)],
        }
    }
}

/// Ray overlay uniforms; mirrors `Rays` in `rays.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RayUniforms {
    /// direction.xy, frequency, speed
    pub bands: [[f32; 4]; 3],
    /// offset, weight
    pub band_extra: [[f32; 4]; 3],
    /// rgb tint, dimming
    pub tint: [f32; 4],
    /// band edge0, band edge1, edge fade, time
    pub params: [f32; 4],
    pub fade: [f32; 4],
}

impl RayUniforms {
    pub fn new(overlay: &RayOverlay) -> Self {
        let c = &overlay.config;
        let band = |i: usize| {
            let b = &c.bands[i];
            [b.direction.x, b.direction.y, b.frequency, b.speed]
        };
        let extra = |i: usize| [c.bands[i].offset, c.bands[i].weight, 0.0, 0.0];
        Self {
            bands: [band(0), band(1), band(2)],
            band_extra: [extra(0), extra(1), extra(2)],
            tint: c.tint.extend(c.dimming).to_array(),
            params: [c.band_edges.x, c.band_edges.y, c.edge_fade, overlay.time],
            fade: [c.vertical_fade.x, c.vertical_fade.y, 0.0, 0.0],
        }
    }
}

pub fn clear_color(background: Vec3) -> wgpu::Color {
    wgpu::Color {
        r: background.x as f64,
        g: background.y as f64,
        b: background.z as f64,
        a: 1.0,
    }
}

pub fn blend_state(blending: Blending) -> wgpu::BlendState {
    match blending {
        Blending::Additive => ADDITIVE,
        Blending::Alpha => wgpu::BlendState::ALPHA_BLENDING,
    }
}

/// `src * src_alpha + dst`, the usual glow accumulation.
pub const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};
