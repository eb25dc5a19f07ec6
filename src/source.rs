//! One-shot resolution of the visitor source tag from the page location.

use std::fmt;

use tracing::debug;

/// Fallback tag when the query parameter is absent or empty.
pub const DEFAULT_TAG: &str = "default";

/// Query-parameter key carrying the visitor source.
const SOURCE_PARAM: &str = "source";

/// Where the visitor came from.
///
/// Created once at component mount and never updated afterward, even if the
/// location changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTag(String);

impl SourceTag {
    /// Parse a raw query string (leading `?` optional) and extract the
    /// source tag. The first `source` pair wins; an absent key or an empty
    /// value falls back to [`DEFAULT_TAG`]. Total; never fails.
    pub fn resolve(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let tag = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == SOURCE_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TAG.to_string());
        SourceTag(tag)
    }

    /// Read `window.location.search` and resolve it.
    ///
    /// Outside a browser context (no window, or the location is unreadable)
    /// this degrades to the default tag rather than failing.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        let tag = Self::resolve(&search);
        debug!(source = %tag, "resolved visitor source");
        tag
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
