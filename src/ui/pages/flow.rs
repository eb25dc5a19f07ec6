//! Personalized welcome page.
//!
//! Resolves the visitor source once at mount, then shows the matching card
//! for the rest of the page's lifetime. While the mount effect has not run
//! yet, the standard busy placeholder is shown.

use dioxus::prelude::*;

use crate::content;
use crate::source::SourceTag;
use crate::ui::components::Layout;

/// Readiness of the one-shot source read.
///
/// `Pending` is the initial state; the transition to `Ready` happens exactly
/// once and is never reversed.
#[derive(Clone, PartialEq)]
enum FlowState {
    Pending,
    Ready(SourceTag),
}

/// Personalized flow page component.
#[component]
pub fn FlowPage() -> Element {
    let mut state = use_signal(|| FlowState::Pending);

    // One read per component lifetime; nothing else writes this signal.
    use_effect(move || {
        let tag = SourceTag::from_location();
        state.set(FlowState::Ready(tag));
    });

    let body = match &*state.read() {
        FlowState::Pending => rsx! {
            article { aria_busy: "true", "Loading..." }
        },
        FlowState::Ready(tag) => rsx! {
            FlowCard { tag: tag.as_str().to_string() }
        },
    };

    rsx! {
        Layout { title: "Personalized Flow".to_string(), {body} }
    }
}

/// Static content card for a resolved source tag.
#[component]
pub fn FlowCard(tag: String) -> Element {
    let variant = content::select(&tag);
    let accent = variant.accent;
    let heading = variant.heading;
    let body = variant.body;
    let cta = variant.cta;

    rsx! {
        article { class: "flow-card", style: "max-width:28rem;",
            header {
                h2 { style: "color:{accent};margin-bottom:0;", "{heading}" }
            }
            p { "{body}" }
            footer {
                // Visual affordance only; no click handler is wired.
                button {
                    style: "background-color:{accent};border-color:{accent};",
                    "{cta}"
                }
            }
        }
    }
}
