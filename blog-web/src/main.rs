//! Blog Client - Leptos Frontend
//!
//! A minimal single-page client for a blog: client-side routing,
//! session-token authentication, and post CRUD against a remote API.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod routes;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panics in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("blog client starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
