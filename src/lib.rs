//! # shoe-catalog
//!
//! Leptos + WASM storefront page: a static product catalog rendered into
//! cards with client-side search, a persisted light/dark theme, and a hero
//! image slideshow.
//!
//! All state transitions live in `state` and are plain Rust, testable without
//! a browser. Browser glue sits behind the `csr` feature in `util`, and the
//! Leptos components in `components`/`pages` wire events into the state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    leptos::mount::mount_to_body(app::App);
}
