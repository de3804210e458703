//! Trip Planner Web Client
//!
//! Browser front end for the trip-planning API, built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and signup with a local password-strength check
//! - Trip creation form with generated itineraries
//! - Trip list and favorites with a favorite toggle
//! - Trip detail with day-by-day activities
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the trip API over HTTP; the session lives in
//! `localStorage`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
