//! Terminal output for the tieba CLI
//!
//! Renders the in-memory page and toast notices as coloured text.

pub mod render;

pub use render::{render_notice, render_view};
