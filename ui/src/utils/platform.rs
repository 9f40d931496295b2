//! Platform Helpers
//!
//! Thin wrappers over browser APIs used by the overlay, with native fallbacks
//! so controller logic can run in unit tests.

#[cfg(target_arch = "wasm32")]
use crate::console_debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

/// Moves keyboard focus to the element with the given DOM id, if present
#[cfg(target_arch = "wasm32")]
pub fn focus_element(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());

    match element {
        Some(element) => {
            if let Err(e) = element.focus() {
                console_debug!("[Platform] focus({}) failed: {:?}", element_id, e);
            }
        }
        None => console_debug!("[Platform] No focusable element '{}'", element_id),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_element(_element_id: &str) {}

/// Hides the whole document once the overlay has been torn down, so the
/// host page underneath becomes interactive again
#[cfg(target_arch = "wasm32")]
pub fn hide_document_body() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());

    if let Some(body) = body {
        if let Err(e) = body.style().set_property("display", "none") {
            console_debug!("[Platform] Failed to hide body: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn hide_document_body() {}
