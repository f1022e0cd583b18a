use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use reef_core::normalize_pointer;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;

fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        (
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ),
        canvas.width(),
        canvas.height(),
    )
}

/// Track the pointer over the whole window, stored in NDC for the frame loop.
///
/// Listens on the window so the fact card on top of the canvas does not
/// swallow movement.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: Rc<Cell<Vec2>>) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = pointer_canvas_px(&ev, &canvas);
        let ndc = normalize_pointer(px.x, px.y, canvas.width() as f32, canvas.height() as f32);
        log::trace!("[pointer] px=({:.1},{:.1}) ndc=({:.3},{:.3})", px.x, px.y, ndc.x, ndc.y);
        pointer.set(ndc);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
