#![cfg(target_arch = "wasm32")]
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use glam::Vec2;
use reef_core::{Scene, SceneConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod facts;
mod frame;
mod input;
mod overlay;

use constants::{CANVAS_ID, NEXT_FACT_BUTTON_ID};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn scene_config(document: &web::Document) -> SceneConfig {
    match dom::read_scene_config(document) {
        Some(Ok(config)) => {
            log::info!("[scene] using page config ({} layers)", config.layers.len());
            config
        }
        Some(Err(e)) => {
            log::error!("[scene] page config rejected, using preset: {}", e);
            SceneConfig::underwater()
        }
        None => SceneConfig::underwater(),
    }
}

fn wire_fact_card(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, NEXT_FACT_BUTTON_ID, move || {
        facts::spawn_refresh(doc.clone());
    });
    events::keyboard::wire_global_keydown(document.clone());
    facts::spawn_refresh(document.clone());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reef-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    wire_canvas_resize(&canvas);

    // The card works without WebGPU, so wire it first
    wire_fact_card(&document);

    let seed = rand::random::<u64>();
    log::info!("[scene] seed={}", seed);
    let scene = Scene::new(scene_config(&document), seed);

    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    events::pointer::wire_pointermove(&canvas, pointer.clone());

    let gpu = frame::init_gpu(&canvas, &scene).await;
    if gpu.is_none() {
        log::warn!("[gpu] WebGPU unavailable; background disabled");
    }

    let handle = frame::start_loop(frame::FrameContext {
        scene,
        gpu,
        pointer,
        canvas,
    });
    frame::wire_page_lifecycle(handle);
    Ok(())
}
