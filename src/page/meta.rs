//! Page front matter: the leading `---` delimited YAML block of a content file.
//!
//! # Fields
//!
//! | Field       | Type     | Description                                   |
//! |-------------|----------|-----------------------------------------------|
//! | `title`     | `String` | Navigation text, matching key (required)      |
//! | `permalink` | `String` | Output path, last segment is the url (required) |
//! | `parent`    | `String` | Title of the top-level entry to nest under    |
//!
//! Other fields (`layout`, `nav_order`, ...) are ignored.

use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

use super::PageError;

/// Fields a page must declare to appear in the navigation.
const REQUIRED: [&str; 2] = ["title", "permalink"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub permalink: String,
    #[serde(default)]
    pub parent: Option<String>,
}

impl FrontMatter {
    /// Parse the front matter of `content`; `path` is used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, PageError> {
        let raw = split_front_matter(content)
            .ok_or_else(|| PageError::MissingFrontMatter(path.to_path_buf()))?;

        let value: Value =
            serde_yaml::from_str(raw).map_err(|err| PageError::Yaml(path.to_path_buf(), err))?;
        let Value::Mapping(fields) = &value else {
            return Err(PageError::MissingFrontMatter(path.to_path_buf()));
        };

        for field in REQUIRED {
            if fields.get(field).is_none_or(Value::is_null) {
                return Err(PageError::MissingField {
                    path: path.to_path_buf(),
                    field,
                });
            }
        }

        serde_yaml::from_value(value).map_err(|err| PageError::Yaml(path.to_path_buf(), err))
    }
}

/// Return the YAML between the opening `---` line and the closing `---`
/// (or `...`) line, or `None` if the content has no such block.
fn split_front_matter(content: &str) -> Option<&str> {
    let content = content.trim_start_matches('\u{feff}');
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(&content[start..offset]);
        }
        offset += line.len();
    }

    None
}
