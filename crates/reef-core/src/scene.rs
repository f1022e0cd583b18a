//! Scene assembly: owns every layer buffer, the ray overlay, the camera and
//! the clock, and advances them once per display refresh.

use crate::camera::Camera;
use crate::config::{CameraConfig, LayerDepth, SceneConfig};
use crate::particles::ParticleLayer;
use crate::rays::RayOverlay;
use glam::{Vec2, Vec3};
use instant::Instant;

/// Monotonic clock started when the scene is created.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    start: Instant,
}

impl SceneClock {
    pub fn start_now() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn started_at(start: Instant) -> Self {
        Self { start }
    }

    /// Seconds since start; timestamps before the start read as zero.
    pub fn elapsed_at(&self, now: Instant) -> f32 {
        if now > self.start {
            (now - self.start).as_secs_f32()
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawSlot {
    Layer(usize),
    Rays,
}

/// Borrowed view of one draw call, in draw order. `index` is the layer's
/// position in [`Scene::layers`].
#[derive(Clone, Copy, Debug)]
pub enum DrawItem<'a> {
    Particles { index: usize, layer: &'a ParticleLayer },
    Rays(&'a RayOverlay),
}

pub struct Scene {
    pub camera: CameraConfig,
    pub background: Vec3,
    layers: Vec<ParticleLayer>,
    rays: Option<RayOverlay>,
    order: Vec<DrawSlot>,
    clock: SceneClock,
    elapsed: f32,
    frame: u64,
}

impl Scene {
    /// Build every layer from `config`. Each layer gets its own RNG stream
    /// derived from `seed`.
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        Self::with_clock(config, seed, SceneClock::start_now())
    }

    pub fn with_clock(config: SceneConfig, seed: u64, clock: SceneClock) -> Self {
        let SceneConfig {
            camera,
            background,
            layers,
            rays,
        } = config;
        let layers = layers
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let mix = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                ParticleLayer::from_seed(c, mix)
            })
            .collect::<Vec<_>>();
        let rays = rays.map(RayOverlay::new);
        let order = draw_order_for(&layers, rays.is_some());
        log::info!(
            "[scene] layers={} particles={} rays={}",
            layers.len(),
            layers.iter().map(|l| l.len()).sum::<usize>(),
            rays.is_some()
        );
        Self {
            camera,
            background,
            layers,
            rays,
            order,
            clock,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Advance to the time read from `now` on the scene clock.
    pub fn tick(&mut self, now: Instant, pointer: Vec2) {
        let elapsed = self.clock.elapsed_at(now);
        self.tick_elapsed(elapsed, pointer);
    }

    /// Advance every layer and the ray overlay to `elapsed` seconds, in draw
    /// order. Only interactive layers see the pointer.
    pub fn tick_elapsed(&mut self, elapsed: f32, pointer: Vec2) {
        self.elapsed = elapsed;
        self.frame += 1;
        for slot in &self.order {
            match *slot {
                DrawSlot::Layer(i) => {
                    let layer = &mut self.layers[i];
                    let p = layer.config.is_interactive().then_some(pointer);
                    layer.advance(elapsed, p);
                }
                DrawSlot::Rays => {
                    if let Some(rays) = &mut self.rays {
                        rays.set_time(elapsed);
                    }
                }
            }
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn layers(&self) -> &[ParticleLayer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [ParticleLayer] {
        &mut self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&ParticleLayer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    pub fn rays(&self) -> Option<&RayOverlay> {
        self.rays.as_ref()
    }

    pub fn draw_order(&self) -> impl Iterator<Item = DrawItem<'_>> {
        self.order.iter().filter_map(move |slot| match *slot {
            DrawSlot::Layer(index) => Some(DrawItem::Particles {
                index,
                layer: &self.layers[index],
            }),
            DrawSlot::Rays => self.rays.as_ref().map(DrawItem::Rays),
        })
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::from_config(&self.camera, aspect)
    }
}

/// Background layers, then rays, then mid, then foreground. Layers sharing a
/// depth class keep their configuration order.
fn draw_order_for(layers: &[ParticleLayer], has_rays: bool) -> Vec<DrawSlot> {
    let mut indices: Vec<usize> = (0..layers.len()).collect();
    indices.sort_by_key(|&i| layers[i].config.depth);
    let mut order = Vec::with_capacity(indices.len() + 1);
    let split = indices
        .iter()
        .position(|&i| layers[i].config.depth != LayerDepth::Background)
        .unwrap_or(indices.len());
    order.extend(indices[..split].iter().map(|&i| DrawSlot::Layer(i)));
    if has_rays {
        order.push(DrawSlot::Rays);
    }
    order.extend(indices[split..].iter().map(|&i| DrawSlot::Layer(i)));
    order
}
