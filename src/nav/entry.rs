//! Navigation entries as they appear under `navigation:` in `_config.yml`.
//!
//! # Example
//!
//! ```yaml
//! navigation:
//! - text: Home
//!   url: home/
//!   internal: true
//! - text: Guide
//!   url: guide/
//!   children:
//!   - text: Setup
//!     url: setup/
//!     internal: true
//! ```

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// A single item of the navigation list.
///
/// Keys other than `text`, `url`, `internal` and `children` are kept in
/// `extra` in their original order and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display title, also the matching key (compared lowercased).
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal: Option<bool>,

    /// Manually curated keys (e.g. `external_url`, `sub_menu`).
    #[serde(flatten)]
    pub extra: Mapping,

    /// Nested entries, one level deep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavEntry>>,
}

impl NavEntry {
    /// Entry generated from a page: `{text, url, internal: true}`.
    pub fn from_page(title: &str, url: String) -> Self {
        Self {
            text: title.to_string(),
            url: Some(url),
            internal: Some(true),
            extra: Mapping::new(),
            children: None,
        }
    }

    /// Lookup key used for matching against page titles.
    #[inline]
    pub fn key(&self) -> String {
        normalize_title(&self.text)
    }

    /// Overwrite the generated fields with those of `page`, keeping
    /// `extra` and `children`.
    pub fn merge_from(&mut self, page: &NavEntry) {
        self.text.clone_from(&page.text);
        self.url.clone_from(&page.url);
        self.internal = page.internal;
    }

    /// Get the children list, creating an empty one if absent.
    pub fn children_mut(&mut self) -> &mut Vec<NavEntry> {
        self.children.get_or_insert_with(Vec::new)
    }
}

/// Case-insensitive matching key for titles.
#[inline]
pub fn normalize_title(title: &str) -> String {
    title.to_lowercase()
}

/// Navigation url for a permalink: last non-empty `/` segment plus a
/// trailing slash.
///
/// ```ignore
/// nav_url("/site/about")  -> "about/"
/// nav_url("about")        -> "about/"
/// nav_url("/site/about/") -> "about/"
/// nav_url("/")            -> "/"
/// ```
pub fn nav_url(permalink: &str) -> String {
    let last = permalink
        .split('/')
        .rfind(|segment| !segment.is_empty())
        .unwrap_or_default();
    format!("{last}/")
}
