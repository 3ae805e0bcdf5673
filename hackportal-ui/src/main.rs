//! HackPortal Pages
//!
//! Browser side of the portal, built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with keynote speakers and challenge tabs
//! - Push notification opt-in
//! - Attendee dashboard with a spotlight carousel and a live announcement feed
//!
//! # Architecture
//!
//! The server renders a shell per page with the page's data embedded as
//! JSON. This client-side rendered (CSR) app reads that data on start, mounts
//! the matching page and keeps it live over the push WebSocket.

use leptos::*;
use wasm_bindgen::JsCast;

mod app;
mod components;
mod pages;
mod props;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let Some(boot) = props::read_boot() else {
        web_sys::console::warn_1(&"No portal page props found, nothing to mount".into());
        return;
    };

    match props::root_element().and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(root) => mount_to(root, move || view! { <app::App boot=boot /> }),
        None => mount_to_body(move || view! { <app::App boot=boot /> }),
    }
}
