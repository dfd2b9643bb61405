//! The platform boundary the router drives
//!
//! A [`ViewPort`] is everything the router needs from a rendering
//! environment: section visibility, the nav-link active marker, the
//! address fragment and session history, scrolling, and event listener
//! bookkeeping for page hooks. [`MemoryViewPort`] implements it without
//! any real document.

pub mod memory;

pub use memory::{MemoryViewPort, SessionHistory};

use crate::notice::Notice;
use crate::router::{HistoryEntry, PageId};
use std::fmt;

/// Handle for an attached event listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Element and event a listener is attached to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Click on the tab button carrying `data-tab = tab` inside `section`
    TabButton { section: PageId, tab: String },
    /// Submit of the form inside `section`
    FormSubmit { section: PageId },
}

impl fmt::Display for ListenerTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerTarget::TabButton { section, tab } => {
                write!(f, "#{} .tab-btn[data-tab={}]", section, tab)
            }
            ListenerTarget::FormSubmit { section } => write!(f, "#{} form", section),
        }
    }
}

/// What a listener does when its event fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Mark one tab button and its pane active, clearing the others
    ActivateTab { section: PageId, tab: String },
    /// Suppress the default submit and show a notice instead
    InterceptSubmit { section: PageId, notice: Notice },
}

/// Rendering environment capability injected into the router.
///
/// Queries that match nothing report "absent" (`false`, empty vectors)
/// rather than failing.
pub trait ViewPort {
    /// Ids of every section whose visibility the router controls
    fn managed_sections(&self) -> Vec<String>;

    /// Show or hide a section. Returns `false` if no such section exists.
    fn set_section_visible(&mut self, id: &str, visible: bool) -> bool;

    /// Remove the active marker from every main navigation link
    fn clear_active_nav_links(&mut self);

    /// Mark the main navigation link with this exact href active.
    /// Returns `false` if there is none.
    fn activate_nav_link(&mut self, href: &str) -> bool;

    /// Push a session history entry and set the address fragment
    fn push_history(&mut self, entry: HistoryEntry, fragment: &str);

    /// Current address fragment, including the leading `#` if any
    fn fragment(&self) -> String;

    fn scroll_to_top(&mut self);

    /// `data-tab` values of the tab buttons inside a section
    fn tab_buttons(&self, section: &PageId) -> Vec<String>;

    /// Activate a tab button and the pane it names inside a section
    fn activate_tab(&mut self, section: &PageId, tab: &str) -> bool;

    /// Whether the section contains a form
    fn has_form(&self, section: &PageId) -> bool;

    fn attach_listener(&mut self, target: ListenerTarget, action: UiAction) -> ListenerId;

    /// Returns `false` if the listener was not attached
    fn detach_listener(&mut self, id: ListenerId) -> bool;

    /// Actions of every listener attached to the target, in attach order
    fn listeners_for(&self, target: &ListenerTarget) -> Vec<UiAction>;
}
