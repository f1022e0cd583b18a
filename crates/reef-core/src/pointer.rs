use glam::Vec2;

/// Latest normalized cursor position, `[-1, 1]` on each axis with +y up.
///
/// Written by the input handler, read once per tick. Starts at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    pub fn set_from_pixels(&mut self, px: f32, py: f32, width: f32, height: f32) {
        self.ndc = normalize_pointer(px, py, width, height);
    }
}

/// Map host pixel coordinates to `[-1, 1]`, inverting y.
///
/// A degenerate viewport maps everything to the origin.
#[inline]
pub fn normalize_pointer(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((px / width) * 2.0 - 1.0, -((py / height) * 2.0 - 1.0))
}
