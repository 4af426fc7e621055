//! # admin-dashboard
//!
//! Leptos + WASM back-office client for attendance tracking, store
//! management, and user/admin administration over a REST backend.
//!
//! The crate contains the session/credential resolver, the role-scoped route
//! registry that drives both the router and the navigation drawer, a thin REST
//! client, and the route-level pages rendered inside the authenticated or
//! public shell.

pub mod app;
pub mod components;
pub mod config;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting admin dashboard");
    leptos::mount::mount_to_body(app::App);
}
