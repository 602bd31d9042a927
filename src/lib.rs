//! # conduit-admin
//!
//! Leptos + WASM admin dashboard for the Conduit AI gateway. The dashboard
//! proxies administrative calls (users, models, usage, chat) to the gateway's
//! HTTP API. Its session layer keeps the admin credential in per-tab
//! `sessionStorage` and reconciles it across the server and browser rendering
//! passes so a reload never bounces a signed-in admin back to the login
//! screen.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
