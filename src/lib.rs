//! # electrocare
//!
//! Leptos + WASM front-end for the ElectroCare appliance-repair marketplace.
//! Users request repairs, technicians accept and fulfil them, and admins
//! moderate the platform.
//!
//! This crate contains pages, components, session/auth state, the typed REST
//! client and the push-channel chat client. The `hydrate` feature builds the
//! browser bundle; the `ssr` feature is consumed by the `server` host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("electrocare client hydrating");
    leptos::mount::hydrate_body(app::App);
}
