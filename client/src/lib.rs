//! # client
//!
//! Leptos + WASM frontend for the PMB chatbot: the public chat widget and the
//! admin dashboard (intents, chat history, training runs, accounts).
//!
//! Authentication state lives in one [`session::SessionStore`] held in a
//! reactive signal and provided through context; admin routes are wrapped in
//! a guard that decides render-or-redirect before building the page.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// CSR entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("pmb client starting, api={}", config::api_base());
    leptos::mount::mount_to_body(app::App);
}
