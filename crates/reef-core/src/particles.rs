//! Particle arenas and the field generator.
//!
//! A [`ParticleLayer`] keeps one contiguous buffer per attribute channel,
//! indexed by particle id, so the animator can mutate them in place and the
//! renderer can upload them without per-particle allocation.

use crate::config::{DepthRule, LayerConfig};
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct ParticleLayer {
    pub config: LayerConfig,
    pub(crate) positions: Vec<Vec3>,
    /// Anchor for floating motion. Never written after generation.
    pub(crate) base_positions: Vec<Vec3>,
    pub(crate) colors: Vec<Vec3>,
    pub(crate) sizes: Vec<f32>,
    /// Whole-layer rotation about the y axis, in radians.
    pub rotation_y: f32,
    dirty: bool,
}

impl ParticleLayer {
    /// Generate a layer from a seeded RNG.
    pub fn from_seed(config: LayerConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(config, &mut rng)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Channels keep the generated length; only values can change.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn base_positions(&self) -> &[Vec3] {
        &self.base_positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Whether the attribute buffers changed since the renderer last
    /// uploaded them.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/// Produce `config.count` particles with pseudo-random initial attributes.
///
/// Every random draw is a uniform `f32` in `[0, 1)` so that a fixed stream of
/// draws maps predictably onto positions, palette buckets and sizes.
pub fn generate<R: Rng + ?Sized>(config: LayerConfig, rng: &mut R) -> ParticleLayer {
    let count = config.count;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    let mut sizes = Vec::with_capacity(count);

    for _ in 0..count {
        let x = (rng.gen::<f32>() - 0.5) * config.extent.x;
        let y = (rng.gen::<f32>() - 0.5) * config.extent.y;
        let z = match config.depth_rule {
            DepthRule::Uniform { extent } => (rng.gen::<f32>() - 0.5) * extent,
            DepthRule::Jitter { offset, jitter } => offset + (rng.gen::<f32>() - 0.5) * jitter,
            DepthRule::Fixed { offset } => offset,
        };
        positions.push(Vec3::new(x, y, z));

        let roll = rng.gen::<f32>();
        let size_roll = rng.gen::<f32>();
        match config.palette.pick(roll) {
            Some(bucket) => {
                colors.push(bucket.color);
                sizes.push(bucket.size.unwrap_or(config.size).sample(size_roll));
            }
            None => {
                colors.push(Vec3::ONE);
                sizes.push(config.size.sample(size_roll));
            }
        }
    }

    log::debug!(
        "[particles] generated layer `{}` count={}",
        config.name,
        count
    );

    ParticleLayer {
        base_positions: positions.clone(),
        positions,
        colors,
        sizes,
        rotation_y: 0.0,
        dirty: true,
        config,
    }
}
