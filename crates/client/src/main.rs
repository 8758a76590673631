//! AidSwap client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use aidswap_client::{auth_session::AuthProvider, components::ToastProvider, logging, routes::Route};
use dioxus::prelude::*;

// Assets
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
