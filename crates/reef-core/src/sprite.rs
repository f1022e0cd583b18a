use crate::constants::SPRITE_STOPS;

/// Rasterize a soft white disc as tightly packed RGBA8 rows.
///
/// Alpha follows a radial gradient through [`SPRITE_STOPS`], interpolated
/// linearly on the distance from the center normalized by the radius. Built
/// once at startup and uploaded as the particle sprite texture.
pub fn soft_sprite(size: u32) -> Vec<u8> {
    let size = size.max(1);
    let radius = size as f32 / 2.0;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let r = (dx * dx + dy * dy).sqrt() / radius;
            let a = (gradient_alpha(r) * 255.0).round() as u8;
            pixels.extend_from_slice(&[255, 255, 255, a]);
        }
    }
    pixels
}

/// Gradient alpha at normalized radius `r`; zero beyond the last stop.
pub fn gradient_alpha(r: f32) -> f32 {
    let mut prev = SPRITE_STOPS[0];
    if r <= prev.0 {
        return prev.1;
    }
    for stop in SPRITE_STOPS.iter().skip(1) {
        if r <= stop.0 {
            let t = (r - prev.0) / (stop.0 - prev.0);
            return prev.1 + (stop.1 - prev.1) * t;
        }
        prev = *stop;
    }
    0.0
}
