//! Configuration for a navigation sync run.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── site       # the site's _config.yml (raw text + navigation list)
//! ├── types/     # ConfigError, diagnostics, field names
//! └── mod.rs     # SyncConfig (this file)
//! ```
//!
//! # Settings
//!
//! Settings come from an optional `navsync.toml` in the site directory,
//! overridden by CLI flags:
//!
//! | Field         | Default        | Purpose                                |
//! |---------------|----------------|----------------------------------------|
//! | `config_file` | `_config.yml`  | Site config holding the navigation     |
//! | `pages_dir`   | `pages`        | Content directory scanned recursively  |
//! | `extension`   | `md`           | Content file extension                 |
//! | `nav_key`     | `navigation`   | Top-level key of the navigation list   |

pub mod site;
pub mod types;

pub use site::SiteFile;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Settings for one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Site directory; `config_file` and `pages_dir` are relative to it.
    #[serde(skip)]
    pub root: PathBuf,

    pub config_file: PathBuf,
    pub pages_dir: PathBuf,
    pub extension: String,
    pub nav_key: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            config_file: PathBuf::from("_config.yml"),
            pages_dir: PathBuf::from("pages"),
            extension: "md".to_string(),
            nav_key: "navigation".to_string(),
        }
    }
}

impl SyncConfig {
    /// Default settings for the site at `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Build settings from CLI arguments.
    ///
    /// Reads `<base_dir>/<settings>` if present, then applies CLI overrides
    /// and validates the result.
    pub fn load(cli: &Cli) -> Result<Self> {
        let settings_path = cli.base_dir.join(&cli.settings);
        let mut config = if settings_path.is_file() {
            Self::from_path(&settings_path)?
        } else {
            Self::default()
        };

        config.root = cli.base_dir.clone();
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse settings from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load settings from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Apply CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.config_file, cli.config_file.as_ref());
        Self::update_option(&mut self.pages_dir, cli.pages.as_ref());
        Self::update_option(&mut self.extension, cli.extension.as_ref());
        Self::update_option(&mut self.nav_key, cli.key.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate settings, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.config_file.as_os_str().is_empty() {
            diag.error(FieldPath::CONFIG_FILE, "must not be empty");
        }

        if self.pages_dir.is_absolute() {
            diag.error_with_hint(
                FieldPath::PAGES_DIR,
                format!("must be relative, got `{}`", self.pages_dir.display()),
                "paths are resolved against the site directory",
            );
        }

        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            diag.error(FieldPath::EXTENSION, "must not be empty");
        } else if extension.contains(['/', '\\']) {
            diag.error(FieldPath::EXTENSION, "must be a bare extension such as `md`");
        }

        if self.nav_key.is_empty() {
            diag.error(FieldPath::NAV_KEY, "must not be empty");
        } else if self.nav_key.contains(':') || self.nav_key.contains(char::is_whitespace) {
            diag.error_with_hint(
                FieldPath::NAV_KEY,
                format!("invalid key `{}`", self.nav_key),
                "use the bare top-level key, e.g. `navigation`",
            );
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Absolute-or-relative path of the site config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config_file)
    }

    /// Directory scanned for content pages.
    pub fn pages_path(&self) -> PathBuf {
        self.root.join(&self.pages_dir)
    }

    /// Content extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
