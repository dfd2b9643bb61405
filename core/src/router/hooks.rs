//! Per-page setup hooks
//!
//! A hook attaches the event listeners a page needs once it is shown.
//! [`PageHooks`] remembers what each hook attached, keyed by page, and
//! detaches it before running the hook again, so repeated visits never
//! stack duplicate listeners.

use super::page::PageId;
use crate::viewport::{ListenerId, ViewPort};
use std::collections::HashMap;
use tracing::debug;

/// Setup routine for one page
pub trait PageHook {
    /// Attach this page's listeners and return their handles
    fn bind(&self, page: &PageId, viewport: &mut dyn ViewPort) -> Vec<ListenerId>;
}

impl<F> PageHook for F
where
    F: Fn(&PageId, &mut dyn ViewPort) -> Vec<ListenerId>,
{
    fn bind(&self, page: &PageId, viewport: &mut dyn ViewPort) -> Vec<ListenerId> {
        self(page, viewport)
    }
}

/// Registry of page hooks with a per-page binding guard
#[derive(Default)]
pub struct PageHooks {
    hooks: HashMap<PageId, Box<dyn PageHook>>,
    bound: HashMap<PageId, Vec<ListenerId>>,
}

impl PageHooks {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for a page, replacing any previous one
    pub fn register(mut self, page: impl Into<PageId>, hook: impl PageHook + 'static) -> Self {
        self.hooks.insert(page.into(), Box::new(hook));
        self
    }

    pub fn is_registered(&self, page: &PageId) -> bool {
        self.hooks.contains_key(page)
    }

    /// Pages with a registered hook, sorted
    pub fn pages(&self) -> Vec<&PageId> {
        let mut pages: Vec<_> = self.hooks.keys().collect();
        pages.sort();
        pages
    }

    /// Listeners currently attached on behalf of a page
    pub fn bound_listeners(&self, page: &PageId) -> &[ListenerId] {
        self.bound.get(page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Run the hook registered for `page`, if any.
    ///
    /// Listeners from the previous run for the same page are detached
    /// first. Returns `false` for pages without a hook.
    pub fn run(&mut self, page: &PageId, viewport: &mut dyn ViewPort) -> bool {
        let Some(hook) = self.hooks.get(page) else {
            return false;
        };

        if let Some(previous) = self.bound.remove(page) {
            for id in previous {
                viewport.detach_listener(id);
            }
        }

        let attached = hook.bind(page, viewport);
        debug!(page = %page, listeners = attached.len(), "bound page listeners");
        self.bound.insert(page.clone(), attached);
        true
    }
}

impl std::fmt::Debug for PageHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageHooks")
            .field("pages", &self.pages())
            .field("bound", &self.bound)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SiteLayout;
    use crate::notice::Notice;
    use crate::viewport::{ListenerTarget, MemoryViewPort, UiAction};

    fn submit_hook(page: &PageId, viewport: &mut dyn ViewPort) -> Vec<ListenerId> {
        vec![viewport.attach_listener(
            ListenerTarget::FormSubmit {
                section: page.clone(),
            },
            UiAction::InterceptSubmit {
                section: page.clone(),
                notice: Notice::info("submitted"),
            },
        )]
    }

    #[test]
    fn test_run_unknown_page_is_noop() {
        let mut hooks = PageHooks::new();
        let mut vp = MemoryViewPort::from_layout(&SiteLayout::tieba());

        assert!(!hooks.run(&PageId::from("hot"), &mut vp));
        assert_eq!(vp.total_listeners(), 0);
    }

    #[test]
    fn test_rerun_detaches_previous_listeners() {
        let login = PageId::from("login");
        let mut hooks = PageHooks::new().register("login", submit_hook);
        let mut vp = MemoryViewPort::from_layout(&SiteLayout::tieba());

        assert!(hooks.run(&login, &mut vp));
        let first = hooks.bound_listeners(&login).to_vec();
        assert!(hooks.run(&login, &mut vp));

        let target = ListenerTarget::FormSubmit { section: login.clone() };
        assert_eq!(vp.listener_count(&target), 1);
        assert_ne!(hooks.bound_listeners(&login), first.as_slice());
    }

    #[test]
    fn test_pages_sorted() {
        let hooks = PageHooks::new()
            .register("register", submit_hook)
            .register("login", submit_hook);
        let pages: Vec<_> = hooks.pages().into_iter().map(|p| p.as_str()).collect();
        assert_eq!(pages, vec!["login", "register"]);
        assert!(hooks.is_registered(&PageId::from("login")));
    }
}
