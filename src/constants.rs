// DOM ids and endpoint paths the page is expected to provide.

// Canvas the WebGPU surface is created on
pub const CANVAS_ID: &str = "app-canvas";

// Fact card
pub const FACT_CARD_ID: &str = "fact-card";
pub const FACT_TEXT_ID: &str = "fact-text";
pub const NEXT_FACT_BUTTON_ID: &str = "next-fact";
pub const HIDDEN_CLASS: &str = "hidden";

// Optional `<script type="application/json">` holding a scene config
pub const SCENE_CONFIG_ID: &str = "reef-config";

// Random fact endpoint served next to the static bundle
pub const FACT_ENDPOINT: &str = "/api/random";

pub const FACT_LOADING_TEXT: &str = "Diving for a fact...";
pub const FACT_ERROR_TEXT: &str = "The lobsters are shy right now. Try again in a moment.";
