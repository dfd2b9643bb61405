//! Browsing session driven by typed commands
//!
//! A [`Session`] owns the router, the notice board and the sending half
//! of the search-result channel. Each [`Command`] maps onto one user
//! gesture on the page: clicking a nav link or an in-page link, pressing
//! back or forward, clicking a tab, submitting a form, or searching.

use crate::output::{render_notice, render_view};
use rand::Rng;
use std::fmt::Write;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tieba_core::layout::{SectionKind, HOME_CONTENT_SECTION};
use tieba_core::search::{perform_search, results_notice, SearchOutcome, MAX_RESULTS};
use tieba_core::{
    content, memory_router, ListenerTarget, MemoryViewPort, Notice, NoticeBoard, PageId,
    PageRouter, RouterEvent, SiteLayout,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Delay before a search reports its result count
pub const SEARCH_DELAY: Duration = Duration::from_secs(1);

/// How long a notice stays on the board
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

pub const HELP: &str = "\
commands:
  go <page>         click the nav link for #<page>
  link <href>       click an in-page link (only #fragments navigate)
  back | forward    move through session history
  tab <id>          click a tab button on the current page
  submit            submit the form on the current page
  search <words>    search from the search box
  board <n>         open the n-th hot board
  post <n>          open the n-th hot post
  show              print the page and the current notice
  help              print this help
  quit              leave";

/// A single user gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Link(String),
    Back,
    Forward,
    Tab(String),
    Submit,
    Search(String),
    Board(usize),
    Post(usize),
    Show,
    Help,
    Quit,
}

/// Errors from parsing a command line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type `help` for a list")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a positive number")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, what: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command, what })
            } else {
                Ok(rest.to_string())
            }
        };
        let index = |command: &'static str| -> Result<usize, CommandError> {
            let raw = required(command, "a number")?;
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(CommandError::InvalidNumber(raw)),
            }
        };

        match word {
            "go" | "nav" => required("go", "a page").map(Command::Go),
            "link" => required("link", "an href").map(Command::Link),
            "back" => Ok(Command::Back),
            "forward" => Ok(Command::Forward),
            "tab" => required("tab", "a tab id").map(Command::Tab),
            "submit" => Ok(Command::Submit),
            // The search box accepts anything, blank queries included
            "search" => Ok(Command::Search(rest.to_string())),
            "board" => index("board").map(Command::Board),
            "post" => index("post").map(Command::Post),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the prompt loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text and keep reading
    Continue(String),
    Quit,
}

/// Interactive browsing session over an in-memory page
pub struct Session {
    layout: SiteLayout,
    router: PageRouter<MemoryViewPort>,
    notices: NoticeBoard,
    search_results: UnboundedSender<Notice>,
    search_delay: Duration,
    notice_duration: Duration,
    notice_posted_at: Option<Instant>,
}

impl Session {
    /// Load the page at `fragment` and post the welcome notice
    pub fn new(
        layout: SiteLayout,
        fragment: &str,
        search_results: UnboundedSender<Notice>,
    ) -> Self {
        let router = memory_router(&layout, fragment);
        let mut notices = NoticeBoard::new();
        notices.post(Notice::welcome());
        Self {
            layout,
            router,
            notices,
            search_results,
            search_delay: SEARCH_DELAY,
            notice_duration: NOTICE_DURATION,
            notice_posted_at: Some(Instant::now()),
        }
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub fn router(&self) -> &PageRouter<MemoryViewPort> {
        &self.router
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Render the whole page
    pub fn view(&self) -> String {
        render_view(&self.layout, &self.router)
    }

    /// Post a notice and render it
    pub fn post_notice(&mut self, notice: Notice) -> String {
        let line = render_notice(&notice);
        self.notices.post(notice);
        self.notice_posted_at = Some(Instant::now());
        line
    }

    /// Take the current notice down once it has been up for the notice duration
    fn expire_notice(&mut self) {
        let expired = self
            .notice_posted_at
            .is_some_and(|posted| posted.elapsed() >= self.notice_duration);
        if expired {
            if let Some(notice) = self.notices.dismiss() {
                debug!(message = %notice.message, "notice expired");
            }
            self.notice_posted_at = None;
        }
    }

    /// Apply one command
    pub fn execute(&mut self, command: Command) -> Flow {
        debug!(?command, "executing command");
        self.expire_notice();
        let text = match command {
            Command::Go(page) => {
                let href = if page.starts_with('#') {
                    page
                } else {
                    PageId::new(page).fragment()
                };
                self.router.handle_event(RouterEvent::NavLinkClicked { href });
                self.view()
            }
            Command::Link(href) => {
                if self
                    .router
                    .handle_event(RouterEvent::LinkClicked { href: href.clone() })
                {
                    self.view()
                } else {
                    format!("'{}' leaves the page; not followed\n", href)
                }
            }
            Command::Back => {
                if self.router.viewport_mut().back() {
                    self.router.handle_event(RouterEvent::HistoryNavigated);
                    self.view()
                } else {
                    "already at the oldest history entry\n".to_string()
                }
            }
            Command::Forward => {
                if self.router.viewport_mut().forward() {
                    self.router.handle_event(RouterEvent::HistoryNavigated);
                    self.view()
                } else {
                    "already at the newest history entry\n".to_string()
                }
            }
            Command::Tab(tab) => self.click_tab(tab),
            Command::Submit => self.submit(),
            Command::Search(query) => self.search(&query),
            Command::Board(n) => {
                let notice = n.checked_sub(1).and_then(content::open_board);
                self.open_home_item(notice, "board", n)
            }
            Command::Post(n) => {
                let notice = n.checked_sub(1).and_then(content::open_post);
                self.open_home_item(notice, "post", n)
            }
            Command::Show => match self.notices.current() {
                Some(notice) => format!("{}\n{}", render_notice(notice), self.view()),
                None => self.view(),
            },
            Command::Help => format!("{}\n", HELP),
            Command::Quit => return Flow::Quit,
        };
        Flow::Continue(text)
    }

    fn click_tab(&mut self, tab: String) -> String {
        let target = ListenerTarget::TabButton {
            section: self.router.current_page().clone(),
            tab,
        };
        if self.router.viewport().listener_count(&target) == 0 {
            return format!("nothing listens on {}\n", target);
        }
        self.router.dispatch_ui(&target);
        self.view()
    }

    fn submit(&mut self) -> String {
        let target = ListenerTarget::FormSubmit {
            section: self.router.current_page().clone(),
        };
        let notices = self.router.dispatch_ui(&target);
        if notices.is_empty() {
            return "there is no form on this page\n".to_string();
        }

        let mut out = String::new();
        for notice in notices {
            let _ = writeln!(out, "{}", self.post_notice(notice));
        }
        out
    }

    fn search(&mut self, query: &str) -> String {
        let outcome = perform_search(query);
        let line = self.post_notice(outcome.notice().clone());

        if let SearchOutcome::Pending { query, .. } = outcome {
            let sender = self.search_results.clone();
            let delay = self.search_delay;
            let count = rand::thread_rng().gen_range(0..MAX_RESULTS);
            debug!(%query, count, "scheduling search result");
            // Fire and forget: a closed prompt simply drops the result
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = sender.send(results_notice(count));
            });
        }
        format!("{}\n", line)
    }

    fn open_home_item(&mut self, notice: Option<Notice>, kind: &str, n: usize) -> String {
        let home_content_visible = self
            .layout
            .sections
            .iter()
            .filter(|s| s.id == HOME_CONTENT_SECTION || s.kind == SectionKind::HomeContent)
            .any(|s| self.router.viewport().is_visible(&s.id));
        if !home_content_visible {
            return format!("hot {}s are only listed on the home page\n", kind);
        }

        match notice {
            Some(notice) => format!("{}\n", self.post_notice(notice)),
            None => format!("there is no hot {} #{}\n", kind, n),
        }
    }
}
