//! Router implementation for managing navigation state
//!
//! This module provides the page router: it decides which section is
//! visible, keeps the address fragment and session history in step with
//! that decision, and runs page hooks on every navigation.

use super::hooks::PageHooks;
use super::page::{PageId, FRAGMENT_MARKER};
use super::state::{HistoryEntry, NavigationState};
use crate::layout::SiteLayout;
use crate::notice::Notice;
use crate::viewport::{ListenerTarget, UiAction, ViewPort};
use tracing::{debug, info};

/// Configuration for the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Sections shown together when navigating home
    pub home_sections: Vec<String>,
    /// Whether navigation scrolls the viewport to the top
    pub scroll_to_top: bool,
}

impl RouterConfig {
    /// Create a new router configuration
    pub fn new() -> Self {
        Self {
            home_sections: vec!["home".to_string(), "home-content".to_string()],
            scroll_to_top: true,
        }
    }

    /// Take the home sections from a layout
    pub fn from_layout(layout: &SiteLayout) -> Self {
        Self::new().with_home_sections(layout.home_sections())
    }

    /// Set the sections shown for the home page
    pub fn with_home_sections(mut self, sections: Vec<String>) -> Self {
        self.home_sections = sections;
        self
    }

    /// Leave the scroll position alone on navigation
    pub fn without_scroll(mut self) -> Self {
        self.scroll_to_top = false;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Events the host forwards to the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// Click on a navigation bar link
    NavLinkClicked { href: String },
    /// Click on any link in the page
    LinkClicked { href: String },
    /// The platform moved through session history (back/forward)
    HistoryNavigated,
}

/// Hash router over an injected viewport
#[derive(Debug)]
pub struct PageRouter<V: ViewPort> {
    viewport: V,
    state: NavigationState,
    hooks: PageHooks,
    config: RouterConfig,
}

impl<V: ViewPort> PageRouter<V> {
    /// Boot the router on the page named by the current fragment.
    ///
    /// An empty fragment selects "home". The initial navigation does not
    /// record history.
    pub fn start(viewport: V, hooks: PageHooks, config: RouterConfig) -> Self {
        let initial_page = PageId::from_fragment(&viewport.fragment());
        info!(page = %initial_page, "starting page router");

        let mut router = Self {
            viewport,
            state: NavigationState::new(initial_page.clone()),
            hooks,
            config,
        };
        router.navigate_to_page(initial_page, false);
        router
    }

    /// Show the section for `page`, hiding every other managed section.
    ///
    /// Unknown pages hide everything and show nothing. When
    /// `record_history` is set a history entry for `#<page>` is pushed.
    pub fn navigate_to_page(&mut self, page: impl Into<PageId>, record_history: bool) {
        let page = page.into();

        for section in self.viewport.managed_sections() {
            self.viewport.set_section_visible(&section, false);
        }

        let shown = if page.is_home() {
            let mut shown = false;
            for section in &self.config.home_sections {
                shown |= self.viewport.set_section_visible(section, true);
            }
            shown
        } else {
            self.viewport.set_section_visible(page.as_str(), true)
        };
        if !shown {
            debug!(page = %page, "no section matches page");
        }

        self.state.current_page = page.clone();

        self.viewport.clear_active_nav_links();
        self.viewport.activate_nav_link(&page.fragment());

        if record_history {
            self.viewport
                .push_history(HistoryEntry::new(page.clone()), &page.fragment());
        }

        if self.config.scroll_to_top {
            self.viewport.scroll_to_top();
        }

        debug!(page = %page, record_history, "navigated");
        self.handle_page_specific_actions(&page);
    }

    /// Run the setup hook registered for `page`; unknown pages are a no-op
    pub fn handle_page_specific_actions(&mut self, page: &PageId) {
        self.hooks.run(page, &mut self.viewport);
    }

    /// Handle a navigation event. Returns whether the router navigated.
    pub fn handle_event(&mut self, event: RouterEvent) -> bool {
        match event {
            RouterEvent::NavLinkClicked { href } => {
                let target = href.strip_prefix(FRAGMENT_MARKER).unwrap_or(&href);
                self.navigate_to_page(target, true);
                true
            }
            RouterEvent::LinkClicked { href } => match PageId::from_href(&href) {
                Some(page) => {
                    self.navigate_to_page(page, true);
                    true
                }
                None => false,
            },
            RouterEvent::HistoryNavigated => {
                let page = PageId::from_fragment(&self.viewport.fragment());
                self.navigate_to_page(page, false);
                true
            }
        }
    }

    /// Fire the listeners attached to `target` and apply their actions.
    ///
    /// Returns the notices raised by intercepted submissions.
    pub fn dispatch_ui(&mut self, target: &ListenerTarget) -> Vec<Notice> {
        let mut notices = Vec::new();
        for action in self.viewport.listeners_for(target) {
            match action {
                UiAction::ActivateTab { section, tab } => {
                    self.viewport.activate_tab(&section, &tab);
                }
                UiAction::InterceptSubmit { notice, .. } => notices.push(notice),
            }
        }
        notices
    }

    /// Get the current navigation state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_page(&self) -> &PageId {
        self.state.current_page()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access for host-driven changes such as back/forward.
    /// Follow history moves with [`RouterEvent::HistoryNavigated`].
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn hooks(&self) -> &PageHooks {
        &self.hooks
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{LOGIN_PENDING, REGISTER_PENDING};
    use crate::viewport::MemoryViewPort;

    const PAGES: [&str; 4] = ["hot", "rankings", "login", "register"];

    fn router_at(fragment: &str) -> PageRouter<MemoryViewPort> {
        let layout = SiteLayout::tieba();
        PageRouter::start(
            MemoryViewPort::new(&layout, fragment),
            PageHooks::standard(),
            RouterConfig::from_layout(&layout),
        )
    }

    fn tab(section: &str, tab: &str) -> ListenerTarget {
        ListenerTarget::TabButton {
            section: PageId::from(section),
            tab: tab.to_string(),
        }
    }

    #[test]
    fn test_initial_load_defaults_to_home() {
        let router = router_at("");
        let vp = router.viewport();

        assert!(router.current_page().is_home());
        assert_eq!(vp.visible_sections(), vec!["home", "home-content"]);
        assert_eq!(vp.history().len(), 1);
        assert!(vp.history().state().is_none());
        assert_eq!(vp.active_nav_links(), vec!["#home"]);
    }

    #[test]
    fn test_initial_load_uses_fragment() {
        let router = router_at("#rankings");
        assert_eq!(router.current_page().as_str(), "rankings");
        assert_eq!(router.viewport().visible_sections(), vec!["rankings"]);
        assert_eq!(router.viewport().history().len(), 1);
    }

    #[test]
    fn test_registered_page_is_only_visible_section() {
        let mut router = router_at("");
        for page in PAGES {
            router.navigate_to_page(page, true);
            assert_eq!(router.viewport().visible_sections(), vec![page]);
            assert_eq!(router.current_page().as_str(), page);
        }

        router.navigate_to_page("home", true);
        assert_eq!(
            router.viewport().visible_sections(),
            vec!["home", "home-content"]
        );
    }

    #[test]
    fn test_home_shows_section_declared_without_kind() {
        let layout =
            SiteLayout::from_json(r#"{ "sections": [ { "id": "home" }, { "id": "about" } ] }"#)
                .unwrap();
        let mut router = PageRouter::start(
            MemoryViewPort::from_layout(&layout),
            PageHooks::new(),
            RouterConfig::from_layout(&layout),
        );

        router.navigate_to_page("about", true);
        assert_eq!(router.viewport().visible_sections(), vec!["about"]);

        router.navigate_to_page("home", true);
        assert_eq!(router.viewport().visible_sections(), vec!["home"]);
    }

    #[test]
    fn test_unknown_page_shows_nothing() {
        let mut router = router_at("");
        router.navigate_to_page("settings", true);

        assert!(router.viewport().visible_sections().is_empty());
        assert_eq!(router.current_page().as_str(), "settings");
        assert!(router.viewport().active_nav_links().is_empty());
        assert_eq!(router.viewport().fragment(), "#settings");
    }

    #[test]
    fn test_recorded_navigation_sets_fragment() {
        let mut router = router_at("");
        for page in PAGES {
            router.navigate_to_page(page, true);
            assert_eq!(
                PageId::from_fragment(&router.viewport().fragment()).as_str(),
                page
            );
        }
        assert_eq!(router.viewport().history().len(), 1 + PAGES.len());
        assert_eq!(
            router.viewport().history().state(),
            Some(&HistoryEntry::new("register"))
        );
    }

    #[test]
    fn test_unrecorded_navigation_keeps_history_depth() {
        let mut router = router_at("");
        router.navigate_to_page("hot", true);
        let depth = router.viewport().history().len();

        router.navigate_to_page("rankings", false);
        router.navigate_to_page("login", false);

        assert_eq!(router.viewport().history().len(), depth);
        assert_eq!(router.viewport().fragment(), "#hot");
        assert_eq!(router.current_page().as_str(), "login");
    }

    #[test]
    fn test_back_restores_previous_page() {
        let mut router = router_at("");
        router.navigate_to_page("hot", true);
        router.navigate_to_page("rankings", true);

        assert!(router.viewport_mut().back());
        assert!(router.handle_event(RouterEvent::HistoryNavigated));

        assert_eq!(router.current_page().as_str(), "hot");
        assert_eq!(router.viewport().visible_sections(), vec!["hot"]);
        assert_eq!(router.viewport().history().len(), 3);

        assert!(router.viewport_mut().back());
        router.handle_event(RouterEvent::HistoryNavigated);
        assert!(router.current_page().is_home());

        assert!(router.viewport_mut().forward());
        router.handle_event(RouterEvent::HistoryNavigated);
        assert_eq!(router.current_page().as_str(), "hot");
    }

    #[test]
    fn test_repeated_hot_setup_does_not_duplicate_listeners() {
        let mut router = router_at("");
        let hot = PageId::from("hot");

        router.handle_page_specific_actions(&hot);
        router.handle_page_specific_actions(&hot);

        let vp = router.viewport();
        for id in ["hot-posts", "hot-tiebas", "hot-topics"] {
            assert_eq!(vp.listener_count(&tab("hot", id)), 1);
        }
        assert_eq!(vp.total_listeners(), 3);
    }

    #[test]
    fn test_revisiting_pages_keeps_listener_count_stable() {
        let mut router = router_at("");
        for _ in 0..3 {
            for page in PAGES {
                router.navigate_to_page(page, true);
            }
        }
        // three hot tabs, three ranking tabs, two forms
        assert_eq!(router.viewport().total_listeners(), 8);
    }

    #[test]
    fn test_navigate_to_login() {
        let mut router = router_at("");
        router.viewport_mut().scroll_to(900);

        assert!(router.handle_event(RouterEvent::NavLinkClicked {
            href: "#login".to_string()
        }));

        let vp = router.viewport();
        assert_eq!(vp.visible_sections(), vec!["login"]);
        assert_eq!(vp.scroll_offset(), 0);
        // login lives in the user bar, which never carries the active marker
        assert!(vp.active_nav_links().is_empty());

        let submit = ListenerTarget::FormSubmit {
            section: PageId::from("login"),
        };
        assert_eq!(vp.listener_count(&submit), 1);
        assert_eq!(
            router.dispatch_ui(&submit),
            vec![Notice::info(LOGIN_PENDING)]
        );
    }

    #[test]
    fn test_nav_link_marks_active() {
        let mut router = router_at("");
        router.handle_event(RouterEvent::NavLinkClicked {
            href: "#hot".to_string(),
        });
        assert_eq!(router.viewport().active_nav_links(), vec!["#hot"]);

        router.handle_event(RouterEvent::NavLinkClicked {
            href: "#rankings".to_string(),
        });
        assert_eq!(router.viewport().active_nav_links(), vec!["#rankings"]);
    }

    #[test]
    fn test_link_click_only_follows_fragments() {
        let mut router = router_at("");
        assert!(!router.handle_event(RouterEvent::LinkClicked {
            href: "https://tieba.baidu.com".to_string()
        }));
        assert!(router.current_page().is_home());

        assert!(router.handle_event(RouterEvent::LinkClicked {
            href: "#register".to_string()
        }));
        assert_eq!(router.viewport().visible_sections(), vec!["register"]);
        let submit = ListenerTarget::FormSubmit {
            section: PageId::from("register"),
        };
        assert_eq!(
            router.dispatch_ui(&submit),
            vec![Notice::info(REGISTER_PENDING)]
        );
    }

    #[test]
    fn test_tab_click_switches_pane() {
        let mut router = router_at("#hot");
        assert!(router.dispatch_ui(&tab("hot", "hot-tiebas")).is_empty());

        let vp = router.viewport();
        assert_eq!(vp.active_tab("hot"), Some("hot-tiebas"));
        assert_eq!(vp.active_panes("hot"), vec!["hot-tiebas"]);
    }

    #[test]
    fn test_history_event_with_empty_fragment_goes_home() {
        let mut router = router_at("");
        router.navigate_to_page("hot", true);
        router.viewport_mut().back();
        router.handle_event(RouterEvent::HistoryNavigated);

        assert!(router.current_page().is_home());
        assert_eq!(router.viewport().history().len(), 2);
    }

    #[test]
    fn test_scroll_can_be_disabled() {
        let layout = SiteLayout::tieba();
        let mut router = PageRouter::start(
            MemoryViewPort::from_layout(&layout),
            PageHooks::new(),
            RouterConfig::from_layout(&layout).without_scroll(),
        );
        router.viewport_mut().scroll_to(120);
        router.navigate_to_page("hot", true);
        assert_eq!(router.viewport().scroll_offset(), 120);
    }
}
