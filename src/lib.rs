//! Browser client for the OpsDeck operations console.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate is the WASM front end for a GraphQL backend. Route pages live
//! in `pages`, shared UI state in `state`, transport in `net`, and the
//! sign-in domain logic in `auth`. Browser-only behavior is gated behind the
//! `hydrate` feature so the crate (and its tests) also compile natively.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated bindings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
