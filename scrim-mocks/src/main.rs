//! scrim mocks - web app for developing the dialog components
//!
//! Renders each component with interactive controls. Control state lives in
//! the `state` query parameter so a configuration can be shared by URL.

mod mocks;
mod pages;
mod ui;

use dioxus::prelude::*;
use pages::{MockConfirmDialog, MockIndex, MockModal};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/modal?:state")]
    MockModal { state: Option<String> },
    #[route("/confirm-dialog?:state")]
    MockConfirmDialog { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn configure_logging() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logging: {e}");
    }
}

fn main() {
    configure_logging();
    tracing::info!("Starting scrim mocks");
    dioxus::launch(App);
}
