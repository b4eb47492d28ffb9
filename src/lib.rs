//! # agentdeck-client
//!
//! Leptos + WASM frontend for the Agentdeck workspace. This crate owns
//! the browser-side session lifecycle: credential storage, the refreshing
//! request gateway, route gating, and the signed-in screens that sit on
//! top of them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
