//! CareSlot - Dioxus Web Landing Page
//!
//! Client-rendered landing page for the CareSlot provider waitlist.
//! There is no backend: form submission is simulated with a fixed delay
//! and the only persisted state is one best-effort localStorage record.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod analytics;
mod app;
mod components;
mod content;
mod counter;
mod disclosure;
mod form;
mod notify;
mod pages;
mod storage;
mod time;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
