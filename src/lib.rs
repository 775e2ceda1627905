//! # catalog-client
//!
//! Leptos + WASM browser client for the video/interface catalog manager.
//!
//! The crate is three layers deep: a persisted session store
//! (`state::session` over `util::storage`), a shared HTTP request path
//! that injects the bearer token and unwraps the `{code, msg, data}`
//! envelope (`net::http`, endpoint wrappers in `net::api`), and a
//! navigation guard consulting a route table (`routes`, wired in `app`).
//! Browser-only code is gated behind the `csr` feature so the crate
//! compiles and unit-tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
