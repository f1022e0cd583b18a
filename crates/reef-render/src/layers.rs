use crate::helpers::{uniform_buffer, uniform_entry};
use crate::packing::{blend_state, LayerUniforms, ParticleInstance};
use reef_core::{Blending, ParticleLayer};
use wgpu::util::DeviceExt;

// Unit quad, two triangles, corners at +-0.5.
const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

/// Shared state of the instanced particle pass: one pipeline per blend mode,
/// the quad and the camera/sprite bind group.
pub(crate) struct ParticlePass {
    pub(crate) additive: wgpu::RenderPipeline,
    pub(crate) alpha: wgpu::RenderPipeline,
    pub(crate) layer_bgl: wgpu::BindGroupLayout,
    pub(crate) quad_vb: wgpu::Buffer,
    pub(crate) shared_bg: wgpu::BindGroup,
}

impl ParticlePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera_buffer: &wgpu::Buffer,
        sprite_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::PARTICLES_WGSL.into()),
        });
        let shared_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particles_shared_bgl"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let layer_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particles_layer_bgl"),
            entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let shared_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particles_shared_bg"),
            layout: &shared_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(sprite_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[&shared_bgl, &layer_bgl],
            push_constant_ranges: &[],
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let make = |label: &str, blend: wgpu::BlendState| {
            let vertex_buffers = [
                // slot 0: quad corners
                wgpu::VertexBufferLayout {
                    array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 0,
                        shader_location: 0,
                    }],
                },
                // slot 1: particle instances
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 1,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32,
                            offset: 12,
                            shader_location: 2,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 16,
                            shader_location: 3,
                        },
                    ],
                },
            ];
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pl),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &vertex_buffers,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                // Transparent layers never write depth; order alone decides.
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };

        Self {
            additive: make("particles_additive", blend_state(Blending::Additive)),
            alpha: make("particles_alpha", blend_state(Blending::Alpha)),
            layer_bgl,
            quad_vb,
            shared_bg,
        }
    }

    pub(crate) fn pipeline(&self, blending: Blending) -> &wgpu::RenderPipeline {
        match blending {
            Blending::Additive => &self.additive,
            Blending::Alpha => &self.alpha,
        }
    }
}

/// GPU buffers of one particle layer.
pub(crate) struct LayerResources {
    pub(crate) instance_vb: wgpu::Buffer,
    capacity: usize,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) blending: Blending,
    pub(crate) count: u32,
}

impl LayerResources {
    pub(crate) fn new(device: &wgpu::Device, pass: &ParticlePass, layer: &ParticleLayer) -> Self {
        let capacity = layer.len().max(1);
        let uniform_buffer = uniform_buffer::<LayerUniforms>(device, "layer_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("layer_bg"),
            layout: &pass.layer_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            instance_vb: instance_buffer(device, capacity),
            capacity,
            uniform_buffer,
            bind_group,
            blending: layer.config.material.blending,
            count: 0,
        }
    }

    /// Upload instances and layer uniforms. Grows the instance buffer if the
    /// layer outgrew it.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layer: &ParticleLayer,
        instances: &[ParticleInstance],
    ) {
        if instances.len() > self.capacity {
            self.instance_vb.destroy();
            self.capacity = instances.len();
            self.instance_vb = instance_buffer(device, self.capacity);
            log::debug!(
                "[gpu] grew `{}` instance buffer to {}",
                layer.name(),
                self.capacity
            );
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));
        }
        self.count = instances.len() as u32;
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&LayerUniforms::new(layer)),
        );
    }

    pub(crate) fn destroy(&self) {
        self.instance_vb.destroy();
        self.uniform_buffer.destroy();
    }
}

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<ParticleInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
