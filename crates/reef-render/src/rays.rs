use crate::helpers::{make_fullscreen_pipeline, uniform_buffer, uniform_entry};
use crate::packing::{RayUniforms, ADDITIVE};

pub(crate) struct RayResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_ray_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
) -> RayResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("rays_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::RAYS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("rays_bgl"),
        entries: &[uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("rays_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = make_fullscreen_pipeline(device, &pl, &shader, "fs_rays", format, Some(ADDITIVE));
    let uniform_buffer = uniform_buffer::<RayUniforms>(device, "rays_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("rays_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    RayResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
