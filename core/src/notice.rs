//! Toast notices shown by the front end
//!
//! Only one notice is on screen at a time; posting a new one replaces
//! whatever was showing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Welcome message posted once the page has loaded
pub const WELCOME_MESSAGE: &str = "欢迎来到百度贴吧！";

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }

    /// Background colour of the toast as an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            NoticeLevel::Info => (0x33, 0x85, 0xff),
            NoticeLevel::Success => (0x4e, 0xcd, 0xc4),
            NoticeLevel::Warning => (0xff, 0x95, 0x00),
            NoticeLevel::Error => (0xff, 0x6b, 0x6b),
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single toast message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn welcome() -> Self {
        Self::success(WELCOME_MESSAGE)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Holds the notice currently on screen
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    posted: usize,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing the current one. Returns the replaced notice.
    pub fn post(&mut self, notice: Notice) -> Option<Notice> {
        tracing::debug!(level = %notice.level, message = %notice.message, "posting notice");
        self.posted += 1;
        self.current.replace(notice)
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Number of notices posted over the board's lifetime
    pub fn posted(&self) -> usize {
        self.posted
    }
}
