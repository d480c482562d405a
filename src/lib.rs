//! # auth-views
//!
//! Leptos + WASM session-aware views: an auth status control, a logout
//! control with the user's profile, and the styled button they share.
//!
//! Views talk to the auth/profile backend only through the traits in
//! [`net::service`]; decisions live in [`state`] so they can be tested
//! without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
