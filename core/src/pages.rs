//! Setup hooks for the tieba pages
//!
//! The hot and rankings pages switch panes from a row of tab buttons;
//! the login and register pages intercept their form submission and
//! show a notice instead.

use crate::notice::Notice;
use crate::router::{PageHook, PageHooks, PageId};
use crate::viewport::{ListenerId, ListenerTarget, UiAction, ViewPort};

/// Notice shown instead of submitting the login form
pub const LOGIN_PENDING: &str = "登录功能开发中...";

/// Notice shown instead of submitting the register form
pub const REGISTER_PENDING: &str = "注册功能开发中...";

/// Binds every tab button of a page to activate its pane
#[derive(Debug, Clone, Copy, Default)]
pub struct TabSwitcher;

impl PageHook for TabSwitcher {
    fn bind(&self, page: &PageId, viewport: &mut dyn ViewPort) -> Vec<ListenerId> {
        viewport
            .tab_buttons(page)
            .into_iter()
            .map(|tab| {
                viewport.attach_listener(
                    ListenerTarget::TabButton {
                        section: page.clone(),
                        tab: tab.clone(),
                    },
                    UiAction::ActivateTab {
                        section: page.clone(),
                        tab,
                    },
                )
            })
            .collect()
    }
}

/// Intercepts a page's form submission with a fixed notice
#[derive(Debug, Clone)]
pub struct FormInterceptor {
    notice: Notice,
}

impl FormInterceptor {
    pub fn new(notice: Notice) -> Self {
        Self { notice }
    }
}

impl PageHook for FormInterceptor {
    fn bind(&self, page: &PageId, viewport: &mut dyn ViewPort) -> Vec<ListenerId> {
        if !viewport.has_form(page) {
            return Vec::new();
        }
        vec![viewport.attach_listener(
            ListenerTarget::FormSubmit {
                section: page.clone(),
            },
            UiAction::InterceptSubmit {
                section: page.clone(),
                notice: self.notice.clone(),
            },
        )]
    }
}

impl PageHooks {
    /// Hooks for the hot, rankings, login and register pages
    pub fn standard() -> Self {
        Self::new()
            .register("hot", TabSwitcher)
            .register("rankings", TabSwitcher)
            .register("login", FormInterceptor::new(Notice::info(LOGIN_PENDING)))
            .register(
                "register",
                FormInterceptor::new(Notice::info(REGISTER_PENDING)),
            )
    }
}
