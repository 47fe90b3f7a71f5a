//! SuricataML Dashboard
//!
//! Browser dashboard for the Suricata anomaly API, built with Leptos (WASM).
//!
//! # Views
//!
//! - Statistics: event totals and the sources with most alerts
//! - Logs: raw EVE records
//! - Rules: the active Suricata rule set
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. The backend endpoint is
//! resolved once before mounting; each view then fetches its own data over
//! HTTP when it mounts.

use leptos::*;

mod api;
mod app;
mod components;
mod console;
mod pages;
mod state;

use api::EndpointStrategy;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let strategy = EndpointStrategy::from_environment();

    wasm_bindgen_futures::spawn_local(async move {
        let endpoint = strategy.resolve().await;
        console::debug(&format!("Backend endpoint: {}", endpoint));

        mount_to_body(move || view! { <app::App endpoint=endpoint /> });
    });
}
