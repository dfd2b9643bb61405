//! # tieba Core
//!
//! Core library for the tieba homepage.
//!
//! The centre of the crate is [`PageRouter`], a hash router that decides
//! which section of the single page is visible and keeps the address
//! fragment and session history in step with it. The router talks to
//! its environment only through the [`ViewPort`] trait, so the same
//! logic runs against a browser binding or the bundled
//! [`MemoryViewPort`].

// Core modules
pub mod content;
pub mod error;
pub mod layout;
pub mod notice;
pub mod pages;
pub mod router;
pub mod search;
pub mod viewport;

// Re-export commonly used types
pub use error::{ConfigError, Error, Result};
pub use layout::SiteLayout;
pub use notice::{Notice, NoticeBoard, NoticeLevel};
pub use router::{PageId, PageRouter, RouterConfig, RouterEvent};
pub use viewport::{ListenerTarget, MemoryViewPort, ViewPort};

/// Current version of the tieba-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

/// Boot a router for a layout on an in-memory viewport loaded at `fragment`
pub fn memory_router(layout: &SiteLayout, fragment: &str) -> PageRouter<MemoryViewPort> {
    PageRouter::start(
        MemoryViewPort::new(layout, fragment),
        router::PageHooks::standard(),
        RouterConfig::from_layout(layout),
    )
}
