//! Static page layout the router manages
//!
//! The layout is the serde description of the markup: which sections
//! exist, which navigation links point at them, which sections carry tab
//! groups or forms. Loading and discovery live in the CLI; core only
//! accepts a layout and validates it.

use crate::error::{ConfigError, Result};
use crate::router::page::FRAGMENT_MARKER;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Id of the hero section shown for the home page
pub const HOME_SECTION: &str = "home";
/// Id of the hot boards and posts section shown for the home page
pub const HOME_CONTENT_SECTION: &str = "home-content";

/// Role a section plays on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Hero banner shown as part of the home page
    Hero,
    /// Hot boards and hot posts, shown as part of the home page
    HomeContent,
    /// An ordinary routed page
    #[default]
    Page,
}

/// Which navigation bar a link lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavGroup {
    /// Main links; these carry the active marker
    #[default]
    Main,
    /// Login/register links on the right of the bar
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    #[serde(default)]
    pub kind: SectionKind,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinkSpec {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub group: NavGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    /// `data-tab` of the button, which is also the id of its pane
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroupSpec {
    pub section: String,
    pub tabs: Vec<TabSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    pub section: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Complete page layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLayout {
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub nav_links: Vec<NavLinkSpec>,
    #[serde(default)]
    pub tab_groups: Vec<TabGroupSpec>,
    #[serde(default)]
    pub forms: Vec<FormSpec>,
}

impl SiteLayout {
    /// Parse a layout from JSON and validate it
    pub fn from_json(content: &str) -> Result<Self> {
        let layout: SiteLayout = serde_json::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Validate the layout
    pub fn validate(&self) -> Result<()> {
        let mut section_ids = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sections.id".to_string(),
                    value: String::new(),
                }
                .into());
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection {
                    id: section.id.clone(),
                }
                .into());
            }
        }

        for link in &self.nav_links {
            if !link.href.starts_with(FRAGMENT_MARKER) {
                return Err(ConfigError::InvalidValue {
                    field: format!("nav_links.{}.href", link.label),
                    value: link.href.clone(),
                }
                .into());
            }
        }

        for group in &self.tab_groups {
            if !section_ids.contains(group.section.as_str()) {
                return Err(ConfigError::UnknownSection {
                    owner: "tab group".to_string(),
                    section: group.section.clone(),
                }
                .into());
            }
            // Panes are looked up by element id, so they must not shadow a section
            for tab in &group.tabs {
                if section_ids.contains(tab.id.as_str()) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("tab_groups.{}.tabs.id", group.section),
                        value: tab.id.clone(),
                    }
                    .into());
                }
            }
        }

        for form in &self.forms {
            if !section_ids.contains(form.section.as_str()) {
                return Err(ConfigError::UnknownSection {
                    owner: "form".to_string(),
                    section: form.section.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    pub fn section(&self, id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Ids of the sections shown together for the home page: the `home` and
    /// `home-content` sections plus any hero or home-content kinds, in layout order
    pub fn home_sections(&self) -> Vec<String> {
        self.sections
            .iter()
            .filter(|s| {
                s.id == HOME_SECTION
                    || s.id == HOME_CONTENT_SECTION
                    || matches!(s.kind, SectionKind::Hero | SectionKind::HomeContent)
            })
            .map(|s| s.id.clone())
            .collect()
    }

    /// The layout of the tieba homepage
    pub fn tieba() -> Self {
        let section = |id: &str, kind: SectionKind, title: &str| SectionSpec {
            id: id.to_string(),
            kind,
            title: title.to_string(),
        };
        let link = |href: &str, label: &str, group: NavGroup| NavLinkSpec {
            href: href.to_string(),
            label: label.to_string(),
            group,
        };
        let tab = |id: &str, label: &str, active: bool| TabSpec {
            id: id.to_string(),
            label: label.to_string(),
            active,
        };

        Self {
            sections: vec![
                section("home", SectionKind::Hero, "百度贴吧"),
                section("home-content", SectionKind::HomeContent, "热门推荐"),
                section("hot", SectionKind::Page, "热门"),
                section("rankings", SectionKind::Page, "排行榜"),
                section("login", SectionKind::Page, "登录"),
                section("register", SectionKind::Page, "注册"),
            ],
            nav_links: vec![
                link("#home", "首页", NavGroup::Main),
                link("#hot", "热门", NavGroup::Main),
                link("#rankings", "排行榜", NavGroup::Main),
                link("#login", "登录", NavGroup::User),
                link("#register", "注册", NavGroup::User),
            ],
            tab_groups: vec![
                TabGroupSpec {
                    section: "hot".to_string(),
                    tabs: vec![
                        tab("hot-posts", "热门帖子", true),
                        tab("hot-tiebas", "热门贴吧", false),
                        tab("hot-topics", "热门话题", false),
                    ],
                },
                TabGroupSpec {
                    section: "rankings".to_string(),
                    tabs: vec![
                        tab("daily-ranking", "日榜", true),
                        tab("weekly-ranking", "周榜", false),
                        tab("monthly-ranking", "月榜", false),
                    ],
                },
            ],
            forms: vec![
                FormSpec {
                    section: "login".to_string(),
                    fields: vec!["username".to_string(), "password".to_string()],
                },
                FormSpec {
                    section: "register".to_string(),
                    fields: vec![
                        "username".to_string(),
                        "email".to_string(),
                        "password".to_string(),
                        "confirm_password".to_string(),
                    ],
                },
            ],
        }
    }
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self::tieba()
    }
}
