//! Page components for the Dioxus-based web UI.

pub mod flow;

pub use flow::{FlowCard, FlowPage};
