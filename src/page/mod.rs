//! Content pages: front matter parsing and the title index.

mod index;
mod meta;

pub use index::{FrontMatterIndex, collect_pages};
pub use meta::FrontMatter;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading content pages.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to walk content directory `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("no front matter block in `{0}`")]
    MissingFrontMatter(PathBuf),

    #[error("invalid front matter in `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("front matter in `{path}` is missing required field `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_display() {
        let err = PageError::MissingField {
            path: PathBuf::from("pages/about.md"),
            field: "title",
        };
        let display = err.to_string();
        assert!(display.contains("pages/about.md"));
        assert!(display.contains("`title`"));

        let err = PageError::MissingFrontMatter(PathBuf::from("pages/empty.md"));
        assert!(err.to_string().contains("pages/empty.md"));
    }
}
