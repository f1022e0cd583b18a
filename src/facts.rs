use std::cell::Cell;

use reef_core::Fact;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{FACT_ENDPOINT, FACT_ERROR_TEXT, FACT_LOADING_TEXT};
use crate::overlay;

thread_local! {
    static IN_FLIGHT: Cell<bool> = const { Cell::new(false) };
}

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub async fn fetch_random_fact() -> anyhow::Result<Fact> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(FACT_ENDPOINT))
        .await
        .map_err(js_err)?
        .dyn_into::<web::Response>()
        .map_err(|_| anyhow::anyhow!("fetch did not yield a Response"))?;
    if !resp.ok() {
        anyhow::bail!("{} returned {}", FACT_ENDPOINT, resp.status());
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))?;
    Ok(serde_json::from_str(&body)?)
}

/// Fetch a new fact into the card. A request already in flight wins.
pub fn spawn_refresh(document: web::Document) {
    if IN_FLIGHT.with(|f| f.replace(true)) {
        log::debug!("[facts] refresh already in flight");
        return;
    }
    overlay::set_fact_text(&document, FACT_LOADING_TEXT);
    spawn_local(async move {
        match fetch_random_fact().await {
            Ok(fact) => {
                log::info!("[facts] showing #{}", fact.id);
                overlay::set_fact_text(&document, &fact.fact);
            }
            Err(e) => {
                log::warn!("[facts] fetch failed: {:?}", e);
                overlay::set_fact_text(&document, FACT_ERROR_TEXT);
            }
        }
        IN_FLIGHT.with(|f| f.set(false));
    });
}
