use reef_core::{ConfigError, SceneConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::SCENE_CONFIG_ID;
use crate::input;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] #{} not found; click handler not wired", element_id);
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("#{} not found", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", id))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
}

/// Scene config embedded in the page, if any.
///
/// `None` when the page carries no `#reef-config` element or it is empty.
pub fn read_scene_config(document: &web::Document) -> Option<Result<SceneConfig, ConfigError>> {
    let el = document.get_element_by_id(SCENE_CONFIG_ID)?;
    let text = el.text_content()?;
    if text.trim().is_empty() {
        return None;
    }
    Some(SceneConfig::from_json(&text))
}
