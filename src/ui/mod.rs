//! Web UI - the personalized visitor flow.
//!
//! Using Pico CSS (classless CSS framework) for clean, accessible,
//! mobile-friendly design without custom CSS maintenance burden.

pub mod components;
pub mod pages;

use dioxus::prelude::*;

use pages::FlowPage;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

/// Application root: document chrome plus the flow page.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Personalized Flow" }
        document::Stylesheet { href: PICO_CSS }
        FlowPage {}
    }
}
