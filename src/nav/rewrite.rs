//! Line-based replacement of the navigation block in raw config text.
//!
//! The block starts at the first line beginning with `<key>:` and runs over
//! every following line that starts with a space or `-`. The first line that
//! does neither is kept, as is everything before the key line.
//!
//! ```text
//! title: Docs            <- copied
//! navigation:            <- copied, serialized list emitted after it
//! - text: Home           <- dropped
//!   url: home/           <- dropped
//! # trailing comment     <- copied (ends the block)
//! ```

use super::{NavEntry, NavError};

/// Line range of the navigation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Index of the `<key>:` line.
    pub start: usize,
    /// Index of the first line after the block (line count at end of input).
    pub end: usize,
}

/// Result of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// `false` when no `<key>:` line was found and `text` is the input.
    pub replaced: bool,
}

/// Locate the navigation block in `lines` (each line with its terminator).
pub fn find_block(lines: &[&str], key: &str) -> Option<BlockSpan> {
    let marker = format!("{key}:");
    let start = lines.iter().position(|line| line.starts_with(&marker))?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| !is_block_line(line))
        .map_or(lines.len(), |offset| start + 1 + offset);

    Some(BlockSpan { start, end })
}

/// Replace the block under `key` in `raw` with the serialized `nav`.
pub fn rewrite(raw: &str, key: &str, nav: &[NavEntry]) -> Result<Rewrite, NavError> {
    let lines: Vec<&str> = raw.split_inclusive('\n').collect();

    let Some(span) = find_block(&lines, key) else {
        return Ok(Rewrite {
            text: raw.to_string(),
            replaced: false,
        });
    };

    let body = serialize_nav(nav)?;
    let mut text = String::with_capacity(raw.len() + body.len());

    // before + key line
    for line in &lines[..=span.start] {
        text.push_str(line);
    }
    if !text.ends_with('\n') {
        text.push('\n');
    }

    text.push_str(&body);

    // after
    for line in &lines[span.end..] {
        text.push_str(line);
    }

    Ok(Rewrite {
        text,
        replaced: true,
    })
}

/// Serialize the list in block style without a document marker.
///
/// An empty list yields nothing, leaving the key null.
fn serialize_nav(nav: &[NavEntry]) -> Result<String, NavError> {
    if nav.is_empty() {
        return Ok(String::new());
    }
    let yaml = serde_yaml::to_string(nav)?;
    Ok(match yaml.strip_prefix("---\n") {
        Some(rest) => rest.to_string(),
        None => yaml,
    })
}

#[inline]
fn is_block_line(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = "\
# Site settings
title: Docs
navigation:
- text: Home
  url: home/
  internal: true
# keep me

exclude:
  - vendor
";

    fn lines(s: &str) -> Vec<&str> {
        s.split_inclusive('\n').collect()
    }

    fn nav(yaml: &str) -> Vec<NavEntry> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_find_block() {
        let span = find_block(&lines(CONFIG), "navigation").unwrap();
        assert_eq!(span, BlockSpan { start: 2, end: 6 });
    }

    #[test]
    fn test_find_block_missing_key() {
        assert_eq!(find_block(&lines("title: Docs\n"), "navigation"), None);
    }

    #[test]
    fn test_find_block_ignores_nested_key() {
        let text = "site:\n  navigation:\n  - text: A\nnavigation:\n- text: B\n";
        let span = find_block(&lines(text), "navigation").unwrap();
        assert_eq!(span, BlockSpan { start: 3, end: 5 });
    }

    #[test]
    fn test_find_block_runs_to_eof() {
        let text = "navigation:\n- text: A\n  url: a/\n";
        assert_eq!(
            find_block(&lines(text), "navigation"),
            Some(BlockSpan { start: 0, end: 3 })
        );
    }

    #[test]
    fn test_find_block_blank_line_ends_block() {
        let text = "navigation:\n- text: A\n\n- text: B\n";
        assert_eq!(
            find_block(&lines(text), "navigation"),
            Some(BlockSpan { start: 0, end: 2 })
        );
    }

    #[test]
    fn test_find_block_only_first_occurrence() {
        let text = "navigation:\n- text: A\nother: 1\nnavigation:\n- text: B\n";
        assert_eq!(
            find_block(&lines(text), "navigation"),
            Some(BlockSpan { start: 0, end: 2 })
        );
    }

    #[test]
    fn test_rewrite_replaces_only_block() {
        let updated = nav("- text: Home\n  url: home/\n  internal: true\n- text: About\n  url: about/\n  internal: true\n");

        let result = rewrite(CONFIG, "navigation", &updated).unwrap();

        assert!(result.replaced);
        assert_eq!(
            result.text,
            "\
# Site settings
title: Docs
navigation:
- text: Home
  url: home/
  internal: true
- text: About
  url: about/
  internal: true
# keep me

exclude:
  - vendor
"
        );
    }

    #[test]
    fn test_rewrite_same_list_is_identity() {
        let current = nav("- text: Home\n  url: home/\n  internal: true\n");
        let result = rewrite(CONFIG, "navigation", &current).unwrap();
        assert_eq!(result.text, CONFIG);
    }

    #[test]
    fn test_rewrite_preserves_outside_lines() {
        let updated = nav("- text: X\n  children:\n  - text: Y\n");
        let result = rewrite(CONFIG, "navigation", &updated).unwrap();

        let before = lines(CONFIG);
        let after = lines(&result.text);
        assert_eq!(&after[..3], &before[..3]);
        assert_eq!(&after[after.len() - 4..], &before[before.len() - 4..]);
    }

    #[test]
    fn test_rewrite_nested_children() {
        let updated = nav("- text: Guide\n  children:\n  - text: Setup\n    url: setup/\n");
        let result = rewrite("navigation:\n", "navigation", &updated).unwrap();
        assert_eq!(
            result.text,
            "navigation:\n- text: Guide\n  children:\n  - text: Setup\n    url: setup/\n"
        );
    }

    #[test]
    fn test_rewrite_without_block_returns_input() {
        let text = "title: Docs\n";
        let result = rewrite(text, "navigation", &nav("- text: A\n")).unwrap();
        assert!(!result.replaced);
        assert_eq!(result.text, text);
    }

    #[test]
    fn test_rewrite_key_on_last_line_without_newline() {
        let result = rewrite("title: Docs\nnavigation:", "navigation", &nav("- text: A\n")).unwrap();
        assert_eq!(result.text, "title: Docs\nnavigation:\n- text: A\n");
    }

    #[test]
    fn test_rewrite_empty_list_leaves_key_null() {
        let result = rewrite(CONFIG, "navigation", &[]).unwrap();
        assert!(result.text.contains("title: Docs\nnavigation:\n# keep me\n"));

        let value: serde_yaml::Value = serde_yaml::from_str(&result.text).unwrap();
        assert!(value["navigation"].is_null());
    }

    #[test]
    fn test_rewrite_output_reparses() {
        let updated = nav("- text: A\n  url: a/\n  internal: true\n  children:\n  - text: B\n    url: b/\n");
        let result = rewrite(CONFIG, "navigation", &updated).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&result.text).unwrap();
        let reparsed: Vec<NavEntry> = serde_yaml::from_value(value["navigation"].clone()).unwrap();
        assert_eq!(reparsed, updated);
        assert_eq!(value["exclude"][0].as_str(), Some("vendor"));
    }
}
