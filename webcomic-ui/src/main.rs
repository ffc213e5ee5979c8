//! MyWebComic Frontend
//!
//! Fan site for MyWebComic built with Leptos (WASM).
//!
//! # Features
//!
//! - Hash-fragment navigation between home, reader, characters, shop and support
//! - Webtoon reader with infinite scroll, or a three-page manga grid
//! - Chapter search
//! - Light/dark theme
//! - One-time "how did you find us" survey
//!
//! # Architecture
//!
//! Client-side rendered (CSR). All view state lives in the `webcomic` crate's
//! state machine; this crate wires it to the DOM, `localStorage` and timers.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

#[cfg(test)]
mod testing;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
