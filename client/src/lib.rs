//! # userdir-client
//!
//! Leptos + WASM frontend for the user directory: registration, login, and
//! an authenticated listing of registered users backed by a remote HTTP API.
//!
//! The session core lives in `state` (token store, auth bus, session
//! observer) and `util::auth` (route guard). Every network call goes through
//! `net::api`, which normalizes failures into a closed error taxonomy before
//! they reach a page.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
