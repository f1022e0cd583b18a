use glam::Vec2;

/// Keyboard shortcuts of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    NextFact,
    ToggleCard,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "f" | "F" => Some(KeyAction::NextFact),
        "h" | "H" => Some(KeyAction::ToggleCard),
        _ => None,
    }
}

/// Client (CSS pixel) coordinates to canvas backing-store pixels.
///
/// `rect` is the canvas bounding rect as `(left, top, width, height)`.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect: (f32, f32, f32, f32),
    canvas_w: u32,
    canvas_h: u32,
) -> Vec2 {
    let (left, top, w, h) = rect;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = client.x - left;
    let y_css = client.y - top;
    Vec2::new(
        (x_css / w) * canvas_w as f32,
        (y_css / h) * canvas_h as f32,
    )
}

/// Backing-store size for a CSS size and device pixel ratio, never zero.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let w = (css_w * dpr) as u32;
    let h = (css_h * dpr) as u32;
    (w.max(1), h.max(1))
}

/// What a page lifecycle event means for the render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    /// Entering the back/forward cache; keep GPU state.
    Freeze,
    /// Back from the cache.
    Restore,
    /// Leaving for good; release everything.
    Unload,
}

#[inline]
pub fn page_transition(event_type: &str, persisted: bool) -> Option<PageTransition> {
    match (event_type, persisted) {
        ("pagehide", true) => Some(PageTransition::Freeze),
        ("pagehide", false) => Some(PageTransition::Unload),
        ("pageshow", true) => Some(PageTransition::Restore),
        _ => None,
    }
}
