//! Folio UI - portfolio page behaviors (WASM)
//!
//! Attaches the page's interactive behaviors to the static markup:
//! section tracking and page dots, scroll progress, the typewriter greeting,
//! timeline filters, entrance animations, navigation controls and swipe
//! navigation. The rules behind each behavior live in `folio-motion`; this
//! crate only reads the DOM and writes classes/styles back.

#![allow(clippy::type_complexity)]

pub mod selectors;

#[cfg(target_arch = "wasm32")]
pub mod behaviors;
#[cfg(target_arch = "wasm32")]
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod timers;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    web_sys::console::log_1(&"=== FOLIO UI WASM LOADED ===".into());

    match controller::boot() {
        Ok(()) => {}
        Err(err) if err.is_fatal_for_page() => {
            tracing::error!(error = %err, "page behaviors not installed");
        }
        Err(err) => tracing::warn!(error = %err, "page boot incomplete"),
    }
}
