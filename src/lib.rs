//! # folio
//!
//! Client-side behavior for a static portfolio page, compiled to WebAssembly.
//!
//! All interaction state lives in [`controller::PageController`], which is
//! plain Rust and returns [`controller::Effect`]s instead of touching the DOM.
//! The `dom` module (feature `hydrate`) is the only code that talks to the
//! browser: it wires listeners, measures layout, owns timers, and applies
//! effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Page state machine and the effects it emits |
//! | [`theme`] | Light/dark theme and the preference store seam |
//! | [`nav`] | Scroll thresholds, section highlighting, anchors, mobile menu |
//! | [`contact`] | Contact form input and validation |
//! | [`resume`] | Plain-text resume export |
//! | [`reveal`] | Reveal-once scroll animation bookkeeping |
//! | [`flourish`] | Card tilt, stagger, typewriter, key combo, console branding |
//! | [`profile`] | Profile record and the page slots it fills |
//! | [`elements`] | Required element ids |
//! | [`error`] | Startup and browser error type |
//! | [`consts`] | Thresholds, delays, class names |

pub mod consts;
pub mod contact;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod elements;
pub mod error;
pub mod flourish;
pub mod nav;
pub mod profile;
pub mod resume;
pub mod reveal;
pub mod theme;

/// WASM entry point: install logging and mount the page controller.
///
/// # Errors
///
/// Returns the mount failure as a JS string so it surfaces in the console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str("logger already installed"));
    }
    dom::mount().map_err(|e| {
        log::error!("page controller failed to start: {e}");
        wasm_bindgen::JsValue::from_str(&e.to_string())
    })
}
