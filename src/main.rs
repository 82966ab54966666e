//! Leaguedex
//!
//! Sports league browser built with Leptos (WASM).
//!
//! # Features
//!
//! - Full league catalog from TheSportsDB
//! - Free-text search and sport filtering
//! - On-demand badge loading per league
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the TheSportsDB JSON API over HTTP; all state
//! lives in the league store and flows to components through context.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
