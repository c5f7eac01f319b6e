//! Huddle Web Client
//!
//! Community chat frontend built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The page chrome - application bar and primary drawer - is
//! composed by the Home page; the drawer adapts to viewport width through a
//! media-query signal.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
