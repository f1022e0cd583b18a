// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn fact_keys_map_in_both_cases() {
    assert_eq!(action_for_key("f"), Some(KeyAction::NextFact));
    assert_eq!(action_for_key("F"), Some(KeyAction::NextFact));
    assert_eq!(action_for_key("h"), Some(KeyAction::ToggleCard));
    assert_eq!(action_for_key("H"), Some(KeyAction::ToggleCard));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", "Enter", " ", "Escape", "ArrowUp", ""] {
        assert_eq!(action_for_key(key), None, "key {:?}", key);
    }
}

#[test]
fn client_position_scales_to_backing_pixels() {
    // 400x300 CSS canvas at (10, 20), backing store at dpr 2
    let rect = (10.0, 20.0, 400.0, 300.0);
    let px = client_to_canvas_px(Vec2::new(210.0, 170.0), rect, 800, 600);
    assert!((px.x - 400.0).abs() < 1e-4);
    assert!((px.y - 300.0).abs() < 1e-4);

    let corner = client_to_canvas_px(Vec2::new(10.0, 20.0), rect, 800, 600);
    assert_eq!(corner, Vec2::ZERO);
}

#[test]
fn positions_outside_canvas_are_not_clamped() {
    let rect = (0.0, 0.0, 100.0, 100.0);
    let px = client_to_canvas_px(Vec2::new(150.0, -50.0), rect, 100, 100);
    assert!((px.x - 150.0).abs() < 1e-4);
    assert!((px.y + 50.0).abs() < 1e-4);
}

#[test]
fn collapsed_rect_maps_to_origin() {
    let px = client_to_canvas_px(Vec2::new(5.0, 5.0), (0.0, 0.0, 0.0, 10.0), 100, 100);
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn backing_size_applies_dpr_and_never_collapses() {
    assert_eq!(backing_size(640.0, 360.0, 1.0), (640, 360));
    assert_eq!(backing_size(640.0, 360.0, 2.0), (1280, 720));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.2, 100.0, 1.0), (1, 100));
}

#[test]
fn cached_pagehide_pauses_instead_of_releasing() {
    assert_eq!(page_transition("pagehide", true), Some(PageTransition::Freeze));
    assert_eq!(page_transition("pageshow", true), Some(PageTransition::Restore));
}

#[test]
fn only_a_real_unload_releases_the_loop() {
    assert_eq!(page_transition("pagehide", false), Some(PageTransition::Unload));
    // First load is handled by init, not the lifecycle listener
    assert_eq!(page_transition("pageshow", false), None);
    assert_eq!(page_transition("visibilitychange", true), None);
}
