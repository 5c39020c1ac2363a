//! TaskDeck
//!
//! A personal to-do dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Account registration and login against a REST backend
//! - Bearer-token sessions persisted in browser local storage
//! - Task create, update, and delete with an in-memory list mirror
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistent state lives behind the REST API; the client
//! keeps only the session token and a transient copy of the task list.

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
