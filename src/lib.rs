//! # inkpost
//!
//! Leptos + WASM frontend for the Inkpost blogging platform.
//!
//! This crate contains the authentication surface: the signup/signin
//! form, the session token store, and the app shell that routes
//! between them. The blogging backend lives behind the configured
//! `BACKEND_URL` and is not part of this crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
