use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::{self, KeyAction};
use crate::{facts, overlay};

pub fn wire_global_keydown(document: web::Document) {
    let target = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(action) = input::action_for_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        match action {
            KeyAction::NextFact => {
                overlay::show(&document);
                facts::spawn_refresh(document.clone());
            }
            KeyAction::ToggleCard => overlay::toggle(&document),
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
