//! Personalized visitor flow.
//!
//! Classifies an incoming visitor by the `source` query parameter of the
//! page location and shows a matching static welcome card. The parameter is
//! read exactly once, at mount; the rendered card is stable for the rest of
//! the page's lifetime.

pub mod content;
pub mod source;
pub mod ui;

pub use ui::App;
