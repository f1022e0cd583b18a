use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use reef_core::Scene;
use reef_render::SceneRenderer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::{self, PageTransition};

pub struct FrameContext {
    pub scene: Scene,
    pub gpu: Option<SceneRenderer<'static>>,
    pub pointer: Rc<Cell<Vec2>>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.scene.tick(Instant::now(), self.pointer.get());

        let Some(g) = self.gpu.as_mut() else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(&mut self.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory; rendering disabled");
                self.gpu = None;
            }
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<SceneRenderer<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match SceneRenderer::new(target, canvas.width(), canvas.height(), scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] init failed: {}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the running animation loop; `stop` tears it down.
#[derive(Clone)]
pub struct LoopHandle {
    ctx: Rc<RefCell<Option<FrameContext>>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl LoopHandle {
    /// Cancel the pending frame but keep the scene and GPU state.
    pub fn pause(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
            log::info!("[scene] paused");
        }
    }

    pub fn resume(&self) {
        if self.ctx.borrow().is_none() || self.raf_id.get().is_some() {
            return;
        }
        self.raf_id.set(request_frame(&self.tick));
        log::info!("[scene] resumed");
    }

    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if let Some(ctx) = self.ctx.borrow_mut().take() {
            log::info!("[scene] stopped after {} frames", ctx.scene.frame_count());
        }
        // breaks the closure's self reference
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(ctx: FrameContext) -> LoopHandle {
    let ctx = Rc::new(RefCell::new(Some(ctx)));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let ctx_tick = ctx.clone();
    let raf_tick = raf_id.clone();
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = match ctx_tick.borrow_mut().as_mut() {
            Some(c) => {
                c.frame();
                true
            }
            None => false,
        };
        if running {
            raf_tick.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));

    LoopHandle { ctx, raf_id, tick }
}

/// Pause on entering the back/forward cache, resume on restore and release
/// everything on a real unload.
pub fn wire_page_lifecycle(handle: LoopHandle) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        match input::page_transition(&ev.type_(), ev.persisted()) {
            Some(PageTransition::Freeze) => handle.pause(),
            Some(PageTransition::Restore) => handle.resume(),
            Some(PageTransition::Unload) => handle.stop(),
            None => {}
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        for event in ["pagehide", "pageshow"] {
            _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}
