//! Sitenav Frontend
//!
//! Site shell built with Leptos (WASM): hierarchical navigation menu synced
//! with the location hash, plus theme and style controls.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Navigation and theme logic live in the `sitenav` crate; this
//! crate renders their state and supplies the browser bindings.

use leptos::*;

mod app;
mod components;
mod dom;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
