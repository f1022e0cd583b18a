// Host-side tests for GPU data packing. No adapter is needed.

use glam::{Mat4, Vec2, Vec3};
use reef_core::*;
use reef_render::packing::*;

#[test]
fn gpu_structs_match_shader_layouts() {
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
    assert_eq!(std::mem::size_of::<CameraUniforms>(), 112);
    assert_eq!(std::mem::size_of::<LayerUniforms>(), 80);
    assert_eq!(std::mem::size_of::<RayUniforms>(), 144);
    for size in [
        std::mem::size_of::<CameraUniforms>(),
        std::mem::size_of::<LayerUniforms>(),
        std::mem::size_of::<RayUniforms>(),
    ] {
        assert_eq!(size % 16, 0);
    }
}

#[test]
fn instances_follow_layer_attributes() {
    let layer = ParticleLayer::from_seed(SceneConfig::drifting_field().layers.remove(0), 1);
    let mut out = vec![ParticleInstance {
        pos: [9.0; 3],
        size: 9.0,
        color: [9.0; 3],
        _pad: 9.0,
    }];
    pack_instances(&layer, &mut out);
    assert_eq!(out.len(), layer.len());
    for (i, inst) in out.iter().enumerate() {
        assert_eq!(inst.pos, layer.positions()[i].to_array());
        assert_eq!(inst.color, layer.colors()[i].to_array());
        assert_eq!(inst.size, layer.sizes()[i]);
    }
}

#[test]
fn layer_uniforms_carry_rotation_and_material() {
    let mut layer = ParticleLayer::from_seed(SceneConfig::drifting_field().layers.remove(0), 2);
    layer.advance(4.0, None);
    let u = LayerUniforms::new(&layer);
    let expected = Mat4::from_rotation_y(layer.rotation_y).to_cols_array_2d();
    assert_eq!(u.model, expected);
    assert_eq!(u.params, [0.8, 1.0, 1.0, 1.0]);
}

#[test]
fn ray_uniforms_pack_bands_and_time() {
    let mut overlay = RayOverlay::new(RayConfig::underwater());
    overlay.set_time(3.5);
    let u = RayUniforms::new(&overlay);
    assert_eq!(u.bands[1], [0.8, -0.2, 14.0, -0.22]);
    assert_eq!(u.band_extra[2], [3.1, 0.2, 0.0, 0.0]);
    assert_eq!(u.tint, [0.6, 0.9, 1.0, 0.15]);
    assert_eq!(u.params, [0.2, 0.9, 0.15, 3.5]);
    assert_eq!(u.fade[..2], [0.2, 1.0]);
}

#[test]
fn camera_uniforms_use_billboard_axes() {
    let camera = Camera::from_config(&CameraConfig::underwater(), 2.0);
    let u = CameraUniforms::new(&camera, 800, 400);
    assert_eq!(u.viewport[..2], [800.0, 400.0]);
    assert!((Vec3::from_slice(&u.right[..3]) - Vec3::X).length() < 1e-5);
    assert!((Vec3::from_slice(&u.up[..3]) - Vec3::Y).length() < 1e-5);

    // The scene origin projects to the center of clip space.
    let clip = Mat4::from_cols_array_2d(&u.view_proj) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    assert!(ndc.length() < 1e-5);
}

#[test]
fn background_becomes_opaque_clear_color() {
    let c = clear_color(Vec3::new(0.5, 0.25, 0.0));
    assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 0.0, 1.0));
}

#[test]
fn blending_modes_map_to_blend_states() {
    assert_eq!(blend_state(Blending::Additive), ADDITIVE);
    assert_eq!(blend_state(Blending::Alpha), wgpu::BlendState::ALPHA_BLENDING);
    assert_eq!(ADDITIVE.color.dst_factor, wgpu::BlendFactor::One);
}
