//! Per-frame particle motion, pointer repulsion and color drift.

use crate::config::{ColorDrift, DriftAxis, FloatAxis, Interaction, Motion};
use crate::constants::REPULSION_FALLBACK_DIR;
use crate::particles::ParticleLayer;
use glam::{Vec2, Vec3};

impl ParticleLayer {
    /// Advance the layer to `elapsed` seconds since scene start.
    ///
    /// `pointer` is the normalized cursor (`[-1, 1]` per axis) and is only
    /// honored by floating layers with an [`Interaction`]. The result depends solely
    /// on the current buffers, `elapsed` and `pointer`.
    pub fn advance(&mut self, elapsed: f32, pointer: Option<Vec2>) {
        let speed = self.config.speed;
        match &self.config.motion {
            Motion::Float { axes } => {
                let axes = *axes;
                for (i, (pos, base)) in self
                    .positions
                    .iter_mut()
                    .zip(self.base_positions.iter())
                    .enumerate()
                {
                    *pos = *base + float_offset(&axes, elapsed, speed.for_index(i), i);
                }
            }
            Motion::Wrap { axes, bounds } => {
                let (axes, bounds) = (*axes, *bounds);
                for (i, pos) in self.positions.iter_mut().enumerate() {
                    let s = speed.for_index(i);
                    for axis in 0..3 {
                        let v = pos[axis] + drift_step(&axes[axis], elapsed, s, i);
                        pos[axis] = match bounds[axis] {
                            Some(bound) => wrap_coordinate(v, bound),
                            None => v,
                        };
                    }
                }
            }
            Motion::Still => {}
        }

        // Floating positions are rebuilt from the anchor each frame, so the
        // push never accumulates.
        let floating = matches!(self.config.motion, Motion::Float { .. });
        if let (true, Some(interaction), Some(pointer)) =
            (floating, self.config.interaction, pointer)
        {
            let target = pointer * interaction.pointer_scale;
            for pos in self.positions.iter_mut() {
                let push = repulsion_offset(pos.truncate(), target, &interaction);
                pos.x += push.x;
                pos.y += push.y;
            }
        }

        if let Some(drift) = self.config.interaction.and_then(|i| i.color_drift) {
            apply_color_drift(&mut self.colors, &drift, elapsed);
        }

        if let Some(rate) = self.config.rotation_rate {
            self.rotation_y = elapsed * rate;
        }

        self.mark_dirty();
    }
}

/// Offset from the anchor for a floating particle.
#[inline]
pub fn float_offset(axes: &[FloatAxis; 3], elapsed: f32, particle_speed: f32, index: usize) -> Vec3 {
    let i = index as f32;
    let axis = |a: &FloatAxis| {
        a.amplitude * a.wave.eval(elapsed * a.speed * particle_speed + i * a.phase)
    };
    Vec3::new(axis(&axes[0]), axis(&axes[1]), axis(&axes[2]))
}

/// Per-frame increment for one axis of a wrapping particle.
#[inline]
pub fn drift_step(axis: &DriftAxis, elapsed: f32, particle_speed: f32, index: usize) -> f32 {
    axis.wave
        .eval(elapsed * axis.rate * particle_speed + index as f32 * axis.phase)
        * axis.step
}

/// Hard reset to the opposite bound once a coordinate leaves `[-bound, bound]`.
#[inline]
pub fn wrap_coordinate(v: f32, bound: f32) -> f32 {
    if v > bound {
        -bound
    } else if v < -bound {
        bound
    } else {
        v
    }
}

/// Planar displacement pushing `particle` away from `pointer` (world units).
///
/// Magnitude is `(R - d) / R * strength` inside the radius and zero outside.
/// A particle exactly on the pointer is pushed along a fixed direction.
pub fn repulsion_offset(particle: Vec2, pointer: Vec2, interaction: &Interaction) -> Vec2 {
    let radius = interaction.radius;
    let delta = particle - pointer;
    let d = delta.length();
    if radius <= 0.0 || d >= radius {
        return Vec2::ZERO;
    }
    let dir = if d > f32::EPSILON {
        delta / d
    } else {
        REPULSION_FALLBACK_DIR
    };
    dir * ((radius - d) / radius * interaction.strength)
}

/// Nudge red and green by a slow global shift, keeping channels in `[0, 1]`.
pub fn apply_color_drift(colors: &mut [Vec3], drift: &ColorDrift, elapsed: f32) {
    let shift = (elapsed * drift.rate).sin();
    let red = shift * drift.red_gain;
    let green = shift.sin() * drift.green_gain;
    for c in colors.iter_mut() {
        c.x = (c.x + red).clamp(0.0, 1.0);
        c.y = (c.y + green).clamp(0.0, 1.0);
    }
}
