//! # summarizer-client
//!
//! Leptos + WASM frontend for the YouTube video summarizer. Replaces the
//! hand-rolled `static/js` page controller with a Rust-native UI layer.
//!
//! This crate contains the submission state machine, the REST helpers for
//! the `/api/summarize` and `/api/health` endpoints, and the page
//! components that render the form, loading status, error banner, and
//! result card. The summarization backend itself is a separate service
//! reached only over HTTP.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
