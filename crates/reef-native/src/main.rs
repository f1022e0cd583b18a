use anyhow::Context;
use instant::Instant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reef_core::{FactBook, PointerState, Scene, SceneConfig};
use reef_render::SceneRenderer;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

const SCENE_ENV: &str = "REEF_SCENE";
const SEED_ENV: &str = "REEF_SEED";

struct App<'w> {
    window: &'w Window,
    renderer: SceneRenderer<'w>,
    scene: Scene,
    pointer: PointerState,
    facts: FactBook,
    rng: StdRng,
}

impl<'w> App<'w> {
    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.scene.tick(Instant::now(), self.pointer.ndc);
        self.renderer.render(&mut self.scene)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize_if_needed(width, height);
    }

    fn set_pointer(&mut self, x: f64, y: f64) {
        let (w, h) = self.renderer.size();
        self.pointer.set_from_pixels(x as f32, y as f32, w as f32, h as f32);
    }

    fn log_fact(&mut self) {
        match self.facts.pick(&mut self.rng) {
            Some(fact) => log::info!("[facts] #{} {}", fact.id, fact.fact),
            None => log::warn!("[facts] no facts bundled"),
        }
    }
}

fn load_scene_config() -> anyhow::Result<SceneConfig> {
    match std::env::var(SCENE_ENV) {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {} from {}", SCENE_ENV, path))?;
            let config = SceneConfig::from_json(&json)
                .with_context(|| format!("parsing scene config {}", path))?;
            log::info!("[scene] loaded config from {}", path);
            Ok(config)
        }
        Err(_) => Ok(SceneConfig::underwater()),
    }
}

fn scene_seed() -> u64 {
    match std::env::var(SEED_ENV).ok().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("[scene] ignoring {}: {}", SEED_ENV, e);
            rand::thread_rng().gen()
        }
        None => rand::thread_rng().gen(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = load_scene_config()?;
    let seed = scene_seed();
    log::info!("[scene] seed={}", seed);
    let scene = Scene::new(config, seed);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Lobster Facts (native)")
        .with_inner_size(LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;

    let size = window.inner_size();
    let renderer = pollster::block_on(SceneRenderer::new(
        &window,
        size.width,
        size.height,
        &scene,
    ))?;

    let mut app = App {
        window: &window,
        renderer,
        scene,
        pointer: PointerState::default(),
        facts: FactBook::bundled()?,
        rng: StdRng::seed_from_u64(seed),
    };
    app.log_fact();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => app.resize(size.width, size.height),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => app.set_pointer(position.x, position.y),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => match logical_key {
            Key::Character(c) if c.as_str() == "f" => app.log_fact(),
            Key::Named(NamedKey::Escape) => elwt.exit(),
            _ => {}
        },
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            log::info!("[scene] closing after {} frames", app.scene.frame_count());
            elwt.exit();
        }
        Event::AboutToWait => match app.frame() {
            Ok(_) => app.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                app.renderer.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                elwt.exit();
            }
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
