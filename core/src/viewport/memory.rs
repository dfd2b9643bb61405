//! In-memory viewport
//!
//! Builds a document from a [`SiteLayout`] and keeps a session history
//! stack the way a browser tab does: an initial entry for the loaded
//! address, pushes that discard any forward entries, and a cursor moved
//! by back/forward.

use super::{ListenerId, ListenerTarget, UiAction, ViewPort};
use crate::layout::{NavGroup, SectionKind, SiteLayout};
use crate::router::{HistoryEntry, PageId};

#[derive(Debug, Clone)]
struct Section {
    id: String,
    kind: SectionKind,
    visible: bool,
}

#[derive(Debug, Clone)]
struct NavLink {
    href: String,
    group: NavGroup,
    active: bool,
}

#[derive(Debug, Clone)]
struct Tab {
    id: String,
    button_active: bool,
    pane_active: bool,
}

#[derive(Debug, Clone)]
struct TabGroup {
    section: PageId,
    tabs: Vec<Tab>,
}

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    target: ListenerTarget,
    action: UiAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryRecord {
    state: Option<HistoryEntry>,
    fragment: String,
}

/// Session history of a single tab
#[derive(Debug, Clone)]
pub struct SessionHistory {
    records: Vec<HistoryRecord>,
    cursor: usize,
}

impl SessionHistory {
    /// Start a history whose only entry is the loaded address
    pub fn new(initial_fragment: impl Into<String>) -> Self {
        Self {
            records: vec![HistoryRecord {
                state: None,
                fragment: initial_fragment.into(),
            }],
            cursor: 0,
        }
    }

    /// Push an entry after the cursor, dropping any forward entries
    pub fn push(&mut self, state: HistoryEntry, fragment: impl Into<String>) {
        self.records.truncate(self.cursor + 1);
        self.records.push(HistoryRecord {
            state: Some(state),
            fragment: fragment.into(),
        });
        self.cursor = self.records.len() - 1;
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.records.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Number of entries in the stack
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.records.len()
    }

    /// State object of the current entry; `None` for the initial load
    pub fn state(&self) -> Option<&HistoryEntry> {
        self.records[self.cursor].state.as_ref()
    }

    pub fn fragment(&self) -> &str {
        &self.records[self.cursor].fragment
    }
}

/// A complete viewport held in memory
#[derive(Debug, Clone)]
pub struct MemoryViewPort {
    sections: Vec<Section>,
    nav_links: Vec<NavLink>,
    tab_groups: Vec<TabGroup>,
    forms: Vec<PageId>,
    history: SessionHistory,
    scroll_offset: u32,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl MemoryViewPort {
    /// Build a viewport for the layout, loaded at the given fragment
    pub fn new(layout: &SiteLayout, fragment: impl Into<String>) -> Self {
        let sections = layout
            .sections
            .iter()
            .map(|s| Section {
                id: s.id.clone(),
                kind: s.kind,
                visible: true,
            })
            .collect();

        let nav_links = layout
            .nav_links
            .iter()
            .map(|l| NavLink {
                href: l.href.clone(),
                group: l.group,
                active: false,
            })
            .collect();

        let tab_groups = layout
            .tab_groups
            .iter()
            .map(|g| TabGroup {
                section: PageId::new(g.section.clone()),
                tabs: g
                    .tabs
                    .iter()
                    .map(|t| Tab {
                        id: t.id.clone(),
                        button_active: t.active,
                        pane_active: t.active,
                    })
                    .collect(),
            })
            .collect();

        let forms = layout
            .forms
            .iter()
            .map(|f| PageId::new(f.section.clone()))
            .collect();

        Self {
            sections,
            nav_links,
            tab_groups,
            forms,
            history: SessionHistory::new(fragment),
            scroll_offset: 0,
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    /// Build a viewport loaded without a fragment
    pub fn from_layout(layout: &SiteLayout) -> Self {
        Self::new(layout, "")
    }

    /// Move back one history entry. The host must then deliver
    /// `RouterEvent::HistoryNavigated` to the router.
    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    /// Move forward one history entry; see [`MemoryViewPort::back`]
    pub fn forward(&mut self) -> bool {
        self.history.forward()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id && s.visible)
    }

    /// Ids of the visible sections in document order
    pub fn visible_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.id.as_str())
            .collect()
    }

    pub fn section_kind(&self, id: &str) -> Option<SectionKind> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.kind)
    }

    /// Hrefs of the nav links currently marked active
    pub fn active_nav_links(&self) -> Vec<&str> {
        self.nav_links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect()
    }

    pub fn is_nav_link_active(&self, href: &str) -> bool {
        self.nav_links.iter().any(|l| l.href == href && l.active)
    }

    /// `data-tab` of the active tab button in a section
    pub fn active_tab(&self, section: &str) -> Option<&str> {
        self.tab_group(section)?
            .tabs
            .iter()
            .find(|t| t.button_active)
            .map(|t| t.id.as_str())
    }

    /// Ids of the active panes in a section
    pub fn active_panes(&self, section: &str) -> Vec<&str> {
        self.tab_group(section)
            .map(|g| {
                g.tabs
                    .iter()
                    .filter(|t| t.pane_active)
                    .map(|t| t.id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of listeners attached to a target
    pub fn listener_count(&self, target: &ListenerTarget) -> usize {
        self.listeners.iter().filter(|l| &l.target == target).count()
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    fn tab_group(&self, section: &str) -> Option<&TabGroup> {
        self.tab_groups.iter().find(|g| g.section.as_str() == section)
    }
}

impl ViewPort for MemoryViewPort {
    fn managed_sections(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    fn set_section_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.visible = visible;
                true
            }
            None => false,
        }
    }

    fn clear_active_nav_links(&mut self) {
        for link in self.nav_links.iter_mut().filter(|l| l.group == NavGroup::Main) {
            link.active = false;
        }
    }

    fn activate_nav_link(&mut self, href: &str) -> bool {
        match self
            .nav_links
            .iter_mut()
            .find(|l| l.group == NavGroup::Main && l.href == href)
        {
            Some(link) => {
                link.active = true;
                true
            }
            None => false,
        }
    }

    fn push_history(&mut self, entry: HistoryEntry, fragment: &str) {
        self.history.push(entry, fragment);
    }

    fn fragment(&self) -> String {
        self.history.fragment().to_string()
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    fn tab_buttons(&self, section: &PageId) -> Vec<String> {
        self.tab_group(section.as_str())
            .map(|g| g.tabs.iter().map(|t| t.id.clone()).collect())
            .unwrap_or_default()
    }

    fn activate_tab(&mut self, section: &PageId, tab: &str) -> bool {
        let Some(group) = self.tab_groups.iter_mut().find(|g| &g.section == section) else {
            return false;
        };
        if !group.tabs.iter().any(|t| t.id == tab) {
            return false;
        }
        for t in group.tabs.iter_mut() {
            let selected = t.id == tab;
            t.button_active = selected;
            t.pane_active = selected;
        }
        true
    }

    fn has_form(&self, section: &PageId) -> bool {
        self.forms.contains(section)
    }

    fn attach_listener(&mut self, target: ListenerTarget, action: UiAction) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener { id, target, action });
        id
    }

    fn detach_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    fn listeners_for(&self, target: &ListenerTarget) -> Vec<UiAction> {
        self.listeners
            .iter()
            .filter(|l| &l.target == target)
            .map(|l| l.action.clone())
            .collect()
    }
}
