//! Navigation state owned by the router

use super::page::PageId;
use serde::{Deserialize, Serialize};

/// Current state of the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Page whose section is currently shown
    pub current_page: PageId,
}

impl NavigationState {
    /// Create a new navigation state on the given page
    pub fn new(current_page: PageId) -> Self {
        Self { current_page }
    }

    pub fn current_page(&self) -> &PageId {
        &self.current_page
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(PageId::home())
    }
}

/// State object pushed to session history on every recorded navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub page: PageId,
}

impl HistoryEntry {
    pub fn new(page: impl Into<PageId>) -> Self {
        Self { page: page.into() }
    }
}
