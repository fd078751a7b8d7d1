//! Merge page front matter into the existing navigation list.
//!
//! Existing entries keep their position. A page whose title matches an
//! entry (case-insensitively) updates that entry in place; a page with a
//! `parent` is nested under the matching top-level entry; everything else is
//! appended at the end, in index order.

use rustc_hash::FxHashMap;

use super::{NavEntry, NavError, entry::normalize_title, nav_url};
use crate::page::FrontMatterIndex;

/// What a merge did, by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Existing top-level entries refreshed from a page.
    pub updated: Vec<String>,
    /// New top-level entries appended at the end.
    pub appended: Vec<String>,
    /// Children refreshed in place, as `(parent, child)`.
    pub updated_children: Vec<(String, String)>,
    /// Children appended under a parent, as `(parent, child)`.
    pub appended_children: Vec<(String, String)>,
}

impl MergeSummary {
    /// Number of entries added to the navigation (top-level or nested).
    pub fn added(&self) -> usize {
        self.appended.len() + self.appended_children.len()
    }

    /// Number of entries refreshed in place.
    pub fn refreshed(&self) -> usize {
        self.updated.len() + self.updated_children.len()
    }
}

/// Merge `index` into `existing` and return the updated list.
///
/// Fails with [`NavError::MissingParent`] if a page names a parent that is
/// not among the existing top-level entries.
pub fn merge(existing: &[NavEntry], index: &FrontMatterIndex) -> Result<Vec<NavEntry>, NavError> {
    merge_with_summary(existing, index).map(|(nav, _)| nav)
}

/// Same as [`merge`], also reporting what changed.
pub fn merge_with_summary(
    existing: &[NavEntry],
    index: &FrontMatterIndex,
) -> Result<(Vec<NavEntry>, MergeSummary), NavError> {
    let mut nav = existing.to_vec();
    let mut summary = MergeSummary::default();

    // Built once: entries appended below are not eligible as parents.
    let by_title: FxHashMap<String, usize> = nav
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.key(), i))
        .collect();

    for (title, front_matter) in index.iter() {
        let page = NavEntry::from_page(title, nav_url(&front_matter.permalink));
        let key = normalize_title(title);

        if let Some(&i) = by_title.get(&key) {
            nav[i].merge_from(&page);
            summary.updated.push(title.to_string());
        } else if let Some(parent) = &front_matter.parent {
            let &pi = by_title
                .get(&normalize_title(parent))
                .ok_or_else(|| NavError::MissingParent {
                    parent: parent.clone(),
                    child: title.to_string(),
                })?;

            let parent_text = nav[pi].text.clone();
            let children = nav[pi].children_mut();
            // Last duplicate wins, like the top-level lookup.
            match children.iter().rposition(|child| child.key() == key) {
                Some(ci) => {
                    children[ci].merge_from(&page);
                    summary.updated_children.push((parent_text, title.to_string()));
                }
                None => {
                    children.push(page);
                    summary.appended_children.push((parent_text, title.to_string()));
                }
            }
        } else {
            nav.push(page);
            summary.appended.push(title.to_string());
        }
    }

    Ok((nav, summary))
}
