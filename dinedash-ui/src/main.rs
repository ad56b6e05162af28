//! DineDash Dashboard
//!
//! Restaurant platform admin dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Overview with system status, stats and top performers
//! - Restaurant table with filters, pagination and an edit dialog
//! - Analytics charts with city/cuisine/partner filters
//! - AI anomaly feed with investigate/resolve workflow
//! - Light/dark theme persisted in local storage
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. All view state lives in a
//! single `dinedash::Dashboard` held in a signal; components read it and
//! event handlers mutate it. Nothing is persisted except the theme mode.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
