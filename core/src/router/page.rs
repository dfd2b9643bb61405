//! Page identifiers and address-fragment decoding
//!
//! A [`PageId`] names one navigable section of the page. It is
//! deliberately open: any string is a valid id, and ids that match no
//! section simply render nothing.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Fragment marker that prefixes every in-page link
pub const FRAGMENT_MARKER: char = '#';

/// Unique identifier for a page section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PageId {
    /// Id of the landing page
    pub const HOME: &'static str = "home";

    /// Create a new page ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The landing page id
    pub fn home() -> Self {
        Self::new(Self::HOME)
    }

    /// Decode a page id from an address fragment.
    ///
    /// One leading `#` is stripped; an empty fragment means "home".
    pub fn from_fragment(fragment: &str) -> Self {
        let id = fragment.strip_prefix(FRAGMENT_MARKER).unwrap_or(fragment);
        if id.is_empty() {
            Self::home()
        } else {
            Self::new(id)
        }
    }

    /// Decode a page id from a link target, if it is an in-page link.
    ///
    /// Unlike [`PageId::from_fragment`], a bare `#` yields an empty id
    /// rather than "home": a link to `#` names no section.
    pub fn from_href(href: &str) -> Option<Self> {
        href.strip_prefix(FRAGMENT_MARKER).map(Self::new)
    }

    /// The URL fragment for this page, including the leading `#`
    pub fn fragment(&self) -> String {
        format!("{}{}", FRAGMENT_MARKER, self.0)
    }

    pub fn is_home(&self) -> bool {
        self.0 == Self::HOME
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&PageId> for PageId {
    fn from(id: &PageId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment() {
        assert_eq!(PageId::from_fragment("#hot").as_str(), "hot");
        assert_eq!(PageId::from_fragment("rankings").as_str(), "rankings");
        assert_eq!(PageId::from_fragment(""), PageId::home());
        assert_eq!(PageId::from_fragment("#"), PageId::home());
    }

    #[test]
    fn test_from_href() {
        assert_eq!(PageId::from_href("#login"), Some(PageId::from("login")));
        assert_eq!(PageId::from_href("#"), Some(PageId::from("")));
        assert_eq!(PageId::from_href("https://tieba.baidu.com/"), None);
    }

    #[test]
    fn test_fragment_round_trip() {
        let page = PageId::from("register");
        assert_eq!(page.fragment(), "#register");
        assert_eq!(PageId::from_fragment(&page.fragment()), page);
    }

    #[test]
    fn test_page_id_traits() {
        let page = PageId::from("hot");

        assert_eq!(format!("{}", page), "hot");

        let s: &str = page.as_ref();
        assert_eq!(s, "hot");

        let s: &str = page.borrow();
        assert_eq!(s, "hot");

        assert!(PageId::default().is_home());
    }
}
