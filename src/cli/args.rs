//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Sync the `navigation:` list of a site's _config.yml with page front matter
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Site directory containing the config file and pages
    #[arg(default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub base_dir: PathBuf,

    /// Settings file, relative to the site directory (default: navsync.toml)
    #[arg(short = 'C', long, default_value = "navsync.toml", value_hint = clap::ValueHint::FilePath)]
    pub settings: PathBuf,

    /// Site config file holding the navigation list (default: _config.yml)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    /// Content directory scanned for pages (default: pages)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub pages: Option<PathBuf>,

    /// Content file extension (default: md)
    #[arg(short, long = "ext")]
    pub extension: Option<String>,

    /// Top-level key of the navigation list (default: navigation)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Print the updated config to stdout instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Fail if the config file is out of date, without writing it
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// What to do with the rewritten config.
    pub fn mode(&self) -> SyncMode {
        if self.check {
            SyncMode::Check
        } else if self.dry_run {
            SyncMode::DryRun
        } else {
            SyncMode::Write
        }
    }
}

/// How a sync run delivers its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Rewrite the config file in place (only if it changed).
    Write,
    /// Print the updated config to stdout.
    DryRun,
    /// Report whether the config is up to date.
    Check,
}
