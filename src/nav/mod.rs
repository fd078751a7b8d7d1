//! Navigation list: entry model, merging with page front matter, and the
//! line-based rewrite of the `navigation:` block.
//!
//! # Module Structure
//!
//! ```text
//! nav/
//! ├── entry      # NavEntry, title normalization, permalink -> url
//! ├── merge      # merge(existing, index) -> updated list
//! └── rewrite    # replace the navigation block in raw config text
//! ```

mod entry;
mod merge;
mod rewrite;

pub use entry::{NavEntry, nav_url, normalize_title};
pub use merge::{MergeSummary, merge, merge_with_summary};
pub use rewrite::{BlockSpan, Rewrite, find_block, rewrite};

use thiserror::Error;

/// Errors raised while merging or serializing the navigation list.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("parent page not present in existing config: {parent}\nneeded by: {child}")]
    MissingParent { parent: String, child: String },

    #[error("failed to serialize navigation list")]
    Serialize(#[from] serde_yaml::Error),
}
