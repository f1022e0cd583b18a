//! Core of the lobster facts underwater background: layer configuration,
//! particle generation and animation, the light-ray overlay and the scene
//! that ties them together once per frame. Platform independent; the web
//! and native front-ends drive it and `reef-render` draws it.

pub mod animate;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod facts;
pub mod particles;
pub mod pointer;
pub mod presets;
pub mod rays;
pub mod scene;
pub mod sprite;

pub use camera::Camera;
pub use config::*;
pub use error::{ConfigError, FactError};
pub use facts::{Fact, FactBook, FactResponse};
pub use particles::{generate, ParticleLayer};
pub use pointer::{normalize_pointer, PointerState};
pub use rays::{shade_fragment, RayOverlay};
pub use scene::{DrawItem, Scene, SceneClock};
