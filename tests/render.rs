//! Server-side render checks for the flow page and cards.
//!
//! `rebuild_in_place` runs the initial render but not mount effects, so the
//! page is captured in its pre-resolution state.

use dioxus::prelude::*;
use personalized_flow::ui::pages::FlowCard;
use personalized_flow::App;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn initial_render_is_the_busy_placeholder() {
    let html = render(App);
    assert!(html.contains("aria-busy"));
    assert!(html.contains("Loading..."));
    // No card copy before the source read completes.
    assert!(!html.contains("Welcome"));
    assert!(!html.contains("button"));
}

#[test]
fn instagram_card_renders_its_copy() {
    fn app() -> Element {
        rsx! { FlowCard { tag: "instagram" } }
    }
    let html = render(app);
    assert!(html.contains("Welcome from Instagram!"));
    assert!(html.contains("Check out our exclusive offers tailored just for you."));
    assert!(html.contains("View Offers"));
    assert!(html.contains("#F60"));
}

#[test]
fn referral_card_renders_its_copy() {
    fn app() -> Element {
        rsx! { FlowCard { tag: "referral" } }
    }
    let html = render(app);
    assert!(html.contains("Welcome from a Referral!"));
    assert!(html.contains("Claim Gift"));
    assert!(html.contains("#16a34a"));
}

#[test]
fn blog_card_renders_its_copy() {
    fn app() -> Element {
        rsx! { FlowCard { tag: "blog" } }
    }
    let html = render(app);
    assert!(html.contains("Welcome from our Blog!"));
    assert!(html.contains("Explore More"));
}

#[test]
fn unknown_source_renders_the_default_card() {
    fn app() -> Element {
        rsx! { FlowCard { tag: "unknown_value" } }
    }
    let html = render(app);
    assert!(html.contains("Welcome!"));
    assert!(html.contains("Discover what we have to offer."));
    assert!(html.contains("Get Started"));
}
