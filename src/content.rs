//! Static content variants keyed by visitor source.
//!
//! The tag-to-variant mapping is a fixed table with an explicit default
//! entry, so totality and the fallback case are visible at a glance.

/// An immutable bundle of display copy for one visitor source.
#[derive(Debug, PartialEq, Eq)]
pub struct ContentVariant {
    pub heading: &'static str,
    pub body: &'static str,
    /// CSS color applied to the heading and the button.
    pub accent: &'static str,
    /// Call-to-action label. The button is a visual affordance only.
    pub cta: &'static str,
}

/// Variant shown for unrecognized or missing sources.
pub const DEFAULT: ContentVariant = ContentVariant {
    heading: "Welcome!",
    body: "Discover what we have to offer.",
    accent: "#1f2937",
    cta: "Get Started",
};

/// Recognized sources. Matching is case-sensitive exact equality.
const RECOGNIZED: &[(&str, ContentVariant)] = &[
    (
        "instagram",
        ContentVariant {
            heading: "Welcome from Instagram!",
            body: "Check out our exclusive offers tailored just for you.",
            accent: "#F60",
            cta: "View Offers",
        },
    ),
    (
        "referral",
        ContentVariant {
            heading: "Welcome from a Referral!",
            body: "Thank you for joining us through a friend. Here's a special gift for you.",
            accent: "#16a34a",
            cta: "Claim Gift",
        },
    ),
    (
        "blog",
        ContentVariant {
            heading: "Welcome from our Blog!",
            body: "Dive deeper into our content with these recommended reads.",
            accent: "#F60",
            cta: "Explore More",
        },
    ),
];

/// Pick the content variant for a source tag.
///
/// Total over all strings: anything outside the recognized set gets
/// [`DEFAULT`].
pub fn select(tag: &str) -> &'static ContentVariant {
    RECOGNIZED
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, variant)| variant)
        .unwrap_or(&DEFAULT)
}
