//! Leptos frontend for the storefront page.

pub mod app;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    coursecart_observability::init();

    leptos::mount_to_body(app::App);
}
