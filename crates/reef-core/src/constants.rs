use glam::Vec3;

// Shared palette and tuning constants used by the scene presets.

// Bioluminescent palette
pub const CORAL: Vec3 = Vec3::new(1.0, 0.42, 0.29);
pub const CYAN: Vec3 = Vec3::new(0.0, 1.0, 0.94);
pub const DEEP_BLUE: Vec3 = Vec3::new(0.0, 0.4, 1.0);
pub const OCEAN_BLUE: Vec3 = Vec3::new(0.0, 0.5, 1.0);

// Palette thresholds (roll > threshold picks the bucket, highest first)
pub const CORAL_THRESHOLD: f32 = 0.9;
pub const CYAN_THRESHOLD: f32 = 0.5;
// Below any roll; marks the catch-all bucket
pub const FALLBACK_THRESHOLD: f32 = -1.0;

// Scene background and camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;

// Ray overlay tint and global dimming
pub const RAY_TINT: Vec3 = Vec3::new(0.6, 0.9, 1.0);
pub const RAY_DIMMING: f32 = 0.15;

// Soft sprite raster: (normalized radius, alpha) gradient stops
pub const SPRITE_SIZE: u32 = 64;
pub const SPRITE_STOPS: [(f32, f32); 4] = [(0.0, 1.0), (0.2, 0.8), (0.5, 0.25), (1.0, 0.0)];

// Direction used to push a particle sitting exactly on the pointer
pub const REPULSION_FALLBACK_DIR: glam::Vec2 = glam::Vec2::X;

// #050a15 as [0, 1] components
pub const BACKGROUND: Vec3 = Vec3::new(5.0 / 255.0, 10.0 / 255.0, 21.0 / 255.0);
