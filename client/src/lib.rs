//! # argus-ui
//!
//! Leptos + WASM frontend for the Argus Core surveillance console.
//!
//! This crate contains the routing shell, pages, components, session state,
//! and the thin REST client used to talk to the surveillance backend. Video
//! ingestion and detection live in that backend; this crate only renders its
//! data and forwards browser camera snapshots to it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
