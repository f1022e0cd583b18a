// Host-side tests for the DOM contract the page must satisfy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_selector_safe() {
    let ids = [
        CANVAS_ID,
        FACT_CARD_ID,
        FACT_TEXT_ID,
        NEXT_FACT_BUTTON_ID,
        SCENE_CONFIG_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(
            a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
            "id {:?}",
            a
        );
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn fact_endpoint_is_same_origin_random_route() {
    assert_eq!(FACT_ENDPOINT, "/api/random");
}

#[test]
fn status_texts_are_not_empty() {
    assert!(!FACT_LOADING_TEXT.trim().is_empty());
    assert!(!FACT_ERROR_TEXT.trim().is_empty());
    assert!(!HIDDEN_CLASS.contains(' '));
}
