//! Title -> front matter index built from a content directory.

use jwalk::{Parallelism, WalkDir};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{FrontMatter, PageError};
use crate::debug;

/// Front matter of every page, keyed by title, in discovery order.
///
/// Inserting a title that is already present replaces the record but keeps
/// the original position.
#[derive(Debug, Clone, Default)]
pub struct FrontMatterIndex {
    records: Vec<FrontMatter>,
    positions: FxHashMap<String, usize>,
}

impl FrontMatterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from records, without touching the filesystem.
    pub fn from_records(records: impl IntoIterator<Item = FrontMatter>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Scan `dir` recursively for files ending in `.{extension}`.
    ///
    /// A missing directory yields an empty index; any unreadable or malformed
    /// file fails the whole scan.
    pub fn scan(dir: &Path, extension: &str) -> Result<Self, PageError> {
        let mut index = Self::new();
        for path in collect_pages(dir, extension)? {
            let content =
                fs::read_to_string(&path).map_err(|err| PageError::Io(path.clone(), err))?;
            let record = FrontMatter::parse(&content, &path)?;
            debug!("scan"; "{} -> {:?}", path.display(), record.title);

            if let Some(previous) = index.insert(record) {
                debug!("scan"; "{} overrides earlier page titled {:?}", path.display(), previous.title);
            }
        }
        Ok(index)
    }

    /// Insert a record, returning the one it replaced (same exact title).
    pub fn insert(&mut self, record: FrontMatter) -> Option<FrontMatter> {
        match self.positions.get(&record.title) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i], record)),
            None => {
                self.positions
                    .insert(record.title.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, title: &str) -> Option<&FrontMatter> {
        self.positions.get(title).map(|&i| &self.records[i])
    }

    /// Iterate `(title, record)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontMatter)> {
        self.records
            .iter()
            .map(|record| (record.title.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<FrontMatter> for FrontMatterIndex {
    fn from_iter<I: IntoIterator<Item = FrontMatter>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

/// Collect content files under `dir` in sorted, depth-first order.
///
/// Symlinks are followed, so a linked page or directory counts like a
/// regular one.
pub fn collect_pages(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, PageError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    let walker = WalkDir::new(dir)
        .sort(true)
        .follow_links(true)
        .parallelism(Parallelism::Serial);

    for entry in walker {
        let entry = entry.map_err(|err| PageError::Walk(dir.to_path_buf(), err))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == extension) {
            pages.push(path);
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_page(root: &Path, rel: &str, front_matter: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("---\n{front_matter}---\n\nBody text.\n")).unwrap();
    }

    fn record(title: &str, permalink: &str) -> FrontMatter {
        FrontMatter {
            title: title.to_string(),
            permalink: permalink.to_string(),
            parent: None,
        }
    }

    #[test]
    fn test_insert_duplicate_keeps_position() {
        let mut index = FrontMatterIndex::new();
        index.insert(record("A", "/a"));
        index.insert(record("B", "/b"));
        let replaced = index.insert(record("A", "/a2"));

        assert_eq!(replaced.map(|r| r.permalink), Some("/a".to_string()));
        let order: Vec<_> = index.iter().map(|(title, fm)| (title, fm.permalink.as_str())).collect();
        assert_eq!(order, [("A", "/a2"), ("B", "/b")]);
    }

    #[test]
    fn test_titles_differing_in_case_are_distinct() {
        let index: FrontMatterIndex = [record("About", "/about"), record("about", "/about")]
            .into_iter()
            .collect();
        assert_eq!(index.len(), 2);
        assert!(index.get("about").is_some());
        assert!(index.get("ABOUT").is_none());
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let index = FrontMatterIndex::scan(&dir.path().join("pages"), "md").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_scan_recursive_sorted() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_page(root, "b.md", "title: Beta\npermalink: /beta\n");
        write_page(root, "a.md", "title: Alpha\npermalink: /alpha\n");
        write_page(root, "guide/setup.md", "title: Setup\npermalink: /guide/setup\nparent: Guide\n");
        fs::write(root.join("notes.txt"), "not a page").unwrap();

        let index = FrontMatterIndex::scan(root, "md").unwrap();

        let titles: Vec<_> = index.iter().map(|(title, _)| title).collect();
        assert_eq!(titles, ["Alpha", "Beta", "Setup"]);
        assert_eq!(
            index.get("Setup").and_then(|fm| fm.parent.as_deref()),
            Some("Guide")
        );
    }

    #[test]
    fn test_scan_fails_on_malformed_page() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_page(root, "good.md", "title: Good\npermalink: /good\n");
        write_page(root, "bad.md", "title: [oops\n");

        let err = FrontMatterIndex::scan(root, "md").unwrap_err();
        assert!(matches!(err, PageError::Yaml(ref path, _) if path.ends_with("bad.md")));
    }

    #[test]
    fn test_scan_fails_on_missing_field() {
        let dir = TempDir::new().unwrap();
        write_page(dir.path(), "about.md", "title: About\n");

        let err = FrontMatterIndex::scan(dir.path(), "md").unwrap_err();
        assert!(matches!(err, PageError::MissingField { field: "permalink", .. }));
    }

    #[test]
    fn test_collect_pages_filters_extension() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("a.md"), "").unwrap();
        fs::write(root.join("b.markdown"), "").unwrap();
        fs::create_dir_all(root.join("c.md")).unwrap();

        let pages = collect_pages(root, "md").unwrap();
        assert_eq!(pages, vec![root.join("a.md")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let shared = TempDir::new().unwrap();
        write_page(shared.path(), "faq.md", "title: FAQ\npermalink: /faq\n");
        write_page(shared.path(), "team/people.md", "title: People\npermalink: /people\n");

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_page(root, "about.md", "title: About\npermalink: /about\n");
        symlink(shared.path().join("faq.md"), root.join("faq.md")).unwrap();
        symlink(shared.path().join("team"), root.join("team")).unwrap();

        let index = FrontMatterIndex::scan(root, "md").unwrap();

        let titles: Vec<_> = index.iter().map(|(title, _)| title).collect();
        assert_eq!(titles, ["About", "FAQ", "People"]);
    }
}
