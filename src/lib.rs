//! Browser wallet demo built with Leptos.
//!
//! Connects injected EIP-1193 wallets, shows the account's address, ENS name
//! and balance, and switches between the supported networks. The same
//! component tree runs client-side (`csr`), hydrates prerendered markup
//! (`hydrate`) or renders to a string on the host (`ssr`).

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

/// Install the panic hook and the console logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(config::LOG_LEVEL);
}

/// Hydrate the markup written into `#app` by the prerenderer.
///
/// Runs when the wasm module is instantiated, so the `hydrate.html` Trunk
/// build needs no extra loader script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    use wasm_bindgen::JsCast;

    init_logging();
    match leptos::prelude::document().get_element_by_id("app") {
        Some(root) => leptos::mount::hydrate_from(root.unchecked_into(), app::App).forget(),
        None => leptos::mount::hydrate_body(app::App),
    }
}

/// Render the page to HTML on the host.
#[cfg(feature = "ssr")]
pub fn render_to_html() -> String {
    use leptos::prelude::*;

    let owner = Owner::new();
    owner.with(|| view! { <app::App /> }.to_html())
}
