//! wgpu renderer for a [`reef_core::Scene`].
//!
//! Draws every particle layer as instanced camera-facing quads and the ray
//! overlay as a fullscreen triangle, in the scene's back-to-front order,
//! straight into the surface. The same code drives the WebGPU canvas and
//! the native window.

pub mod error;
pub mod helpers;
mod layers;
pub mod packing;
mod rays;

pub use error::RenderError;

use layers::{LayerResources, ParticlePass};
use packing::{clear_color, pack_instances, CameraUniforms, ParticleInstance, RayUniforms};
use rays::{create_ray_resources, RayResources};
use reef_core::constants::SPRITE_SIZE;
use reef_core::{DrawItem, Scene};

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static RAYS_WGSL: &str = include_str!("../shaders/rays.wgsl");

pub struct SceneRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    camera_buffer: wgpu::Buffer,
    sprite_tex: wgpu::Texture,
    particles: ParticlePass,
    layers: Vec<LayerResources>,
    rays: Option<RayResources>,
    // scratch for instance packing
    staging: Vec<ParticleInstance>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> SceneRenderer<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> Result<Self, RenderError> {
        let width = width.max(1);
        let height = height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        // Palette and background are display-space values; avoid an sRGB
        // re-encode when the surface offers a plain format.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::UnsupportedSurface)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let camera_buffer = helpers::uniform_buffer::<CameraUniforms>(&device, "camera_uniforms");
        let (sprite_tex, sprite_view) = helpers::create_sprite_texture(&device, &queue, SPRITE_SIZE);
        let sampler = helpers::create_linear_sampler(&device);
        let particles = ParticlePass::new(&device, format, &camera_buffer, &sprite_view, &sampler);
        let layers = scene
            .layers()
            .iter()
            .map(|layer| LayerResources::new(&device, &particles, layer))
            .collect();
        let rays = scene.rays().map(|_| create_ray_resources(&device, format));

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera_buffer,
            sprite_tex,
            particles,
            layers,
            rays,
            staging: Vec::new(),
            width,
            height,
            clear_color: clear_color(scene.background),
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload whatever changed since the last frame and draw the scene.
    pub fn render(&mut self, scene: &mut Scene) -> Result<(), wgpu::SurfaceError> {
        for (res, layer) in self.layers.iter_mut().zip(scene.layers_mut()) {
            if !layer.is_dirty() {
                continue;
            }
            pack_instances(layer, &mut self.staging);
            res.upload(&self.device, &self.queue, layer, &self.staging);
            layer.mark_clean();
        }

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = CameraUniforms::new(&scene.camera(aspect), self.width, self.height);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera));
        if let (Some(res), Some(overlay)) = (&self.rays, scene.rays()) {
            self.queue.write_buffer(
                &res.uniform_buffer,
                0,
                bytemuck::bytes_of(&RayUniforms::new(overlay)),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for item in scene.draw_order() {
                match item {
                    DrawItem::Particles { index, .. } => {
                        let Some(res) = self.layers.get(index) else {
                            continue;
                        };
                        if res.count == 0 {
                            continue;
                        }
                        rpass.set_pipeline(self.particles.pipeline(res.blending));
                        rpass.set_bind_group(0, &self.particles.shared_bg, &[]);
                        rpass.set_bind_group(1, &res.bind_group, &[]);
                        rpass.set_vertex_buffer(0, self.particles.quad_vb.slice(..));
                        rpass.set_vertex_buffer(1, res.instance_vb.slice(..));
                        rpass.draw(0..6, 0..res.count);
                    }
                    DrawItem::Rays(_) => {
                        if let Some(res) = &self.rays {
                            rpass.set_pipeline(&res.pipeline);
                            rpass.set_bind_group(0, &res.bind_group, &[]);
                            rpass.draw(0..3, 0..1);
                        }
                    }
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Drop for SceneRenderer<'_> {
    fn drop(&mut self) {
        for layer in &self.layers {
            layer.destroy();
        }
        if let Some(rays) = &self.rays {
            rays.uniform_buffer.destroy();
        }
        self.camera_buffer.destroy();
        self.particles.quad_vb.destroy();
        self.sprite_tex.destroy();
        log::info!("[gpu] released GPU resources");
    }
}
