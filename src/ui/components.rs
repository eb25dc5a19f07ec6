//! Shared page chrome.

use dioxus::prelude::*;

/// Page wrapper: brand header, centered main container, footer.
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    rsx! {
        header { class: "container",
            nav {
                ul {
                    li { strong { "{title}" } }
                }
            }
        }
        main {
            class: "container",
            style: "display:flex;align-items:center;justify-content:center;min-height:70vh;padding:1rem;",
            {children}
        }
        footer { class: "container",
            small { "Personalized Flow" }
        }
    }
}
