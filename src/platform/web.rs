//! DOM lookups used during startup and on resize

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::error::GameError;
use crate::tuning::Tuning;

/// DOM id of the game canvas
pub const CANVAS_ID: &str = "gameCanvas";
/// DOM id of the optional JSON tuning override
pub const TUNING_ID: &str = "tuning";

pub fn window() -> Result<Window, GameError> {
    web_sys::window().ok_or_else(|| GameError::Platform("no window".into()))
}

pub fn document(window: &Window) -> Result<Document, GameError> {
    window
        .document()
        .ok_or_else(|| GameError::Platform("no document".into()))
}

pub fn canvas(document: &Document) -> Result<HtmlCanvasElement, GameError> {
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| GameError::Platform(format!("no element #{CANVAS_ID}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::Platform(format!("#{CANVAS_ID} is not a canvas")))
}

/// Window inner size in CSS pixels (0 when unavailable)
pub fn viewport_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|f| f.max(0.0) as u32)
            .unwrap_or(0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Tuning from `<script id="tuning" type="application/json">`, defaults otherwise
pub fn load_tuning(document: &Document) -> Tuning {
    let Some(json) = document
        .get_element_by_id(TUNING_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("Using default tuning");
        return Tuning::default();
    };

    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning overrides");
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning overrides: {}", e);
            Tuning::default()
        }
    }
}
