//! Router module for hash-based page navigation
//!
//! This module maps page identifiers to visible sections, keeps the
//! address fragment and session history consistent with the visible
//! page, and runs per-page setup hooks.

pub mod hooks;
pub mod page;
pub mod router;
pub mod state;

// Re-export commonly used types
pub use hooks::{PageHook, PageHooks};
pub use page::PageId;
pub use router::{PageRouter, RouterConfig, RouterEvent};
pub use state::{HistoryEntry, NavigationState};
