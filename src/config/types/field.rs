//! Settings names used in diagnostics.

use std::fmt;

/// A `navsync.toml` field together with the CLI flag that overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    key: &'static str,
    flag: &'static str,
}

impl FieldPath {
    pub const CONFIG_FILE: Self = Self::new("config_file", "--config-file");
    pub const PAGES_DIR: Self = Self::new("pages_dir", "--pages");
    pub const EXTENSION: Self = Self::new("extension", "--ext");
    pub const NAV_KEY: Self = Self::new("nav_key", "--key");

    const fn new(key: &'static str, flag: &'static str) -> Self {
        Self { key, flag }
    }

    /// Key in `navsync.toml`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.key
    }

    /// Command-line flag overriding the key.
    #[inline]
    pub const fn flag(&self) -> &'static str {
        self.flag
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.key, self.flag)
    }
}
