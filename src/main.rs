//! Advise AI Web - Main Entry Point
//!
//! Serves the landing site and dashboard shell. Uses dioxus::serve() for
//! fullstack builds so `dx serve` can hydrate the client bundle.

use advise_ai_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    init_tracing();

    tracing::info!("Starting Advise AI web server...");

    dioxus::serve(|| async move {
        // Pages only, no API routes: every screen renders from static content
        let router = dioxus::server::router(App);
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(
        "[WASM] Advise AI - WASM initialized!",
    ));
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    init_tracing();
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}
