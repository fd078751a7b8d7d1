//! Navigation sync: load `_config.yml`, index the pages, merge, rewrite.
//!
//! ```text
//! SiteFile::load ─┐
//!                 ├─> nav::merge ─> nav::rewrite ─> write / print / check
//! FrontMatterIndex::scan ─┘
//! ```
//!
//! Every failure happens before the write, so the config file is either
//! fully rewritten or left untouched.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    cli::SyncMode,
    config::{SiteFile, SyncConfig},
    debug, log,
    nav::{self, MergeSummary},
    page::FrontMatterIndex,
};

/// The computed result of a sync, before anything is written.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub config_path: PathBuf,
    pub original: String,
    pub updated: String,
    pub summary: MergeSummary,
    /// `false` when the config has no navigation key line to replace.
    pub replaced: bool,
}

impl SyncPlan {
    /// Whether writing the plan would change the file.
    pub fn is_changed(&self) -> bool {
        self.original != self.updated
    }

    /// Write the updated config, skipping the write if nothing changed.
    ///
    /// Returns whether the file was written.
    pub fn write(&self) -> Result<bool> {
        if !self.is_changed() {
            return Ok(false);
        }
        fs::write(&self.config_path, &self.updated)
            .with_context(|| format!("failed to write `{}`", self.config_path.display()))?;
        Ok(true)
    }
}

/// What a [`run`] did with the config file.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// No site config (missing, empty or falsy), nothing was done.
    NoConfig,
    /// The config was rewritten.
    Written(SyncPlan),
    /// The config already matches the pages. Nothing was written.
    UpToDate(SyncPlan),
    /// The updated config was printed instead of written.
    DryRun(SyncPlan),
}

impl SyncOutcome {
    pub fn plan(&self) -> Option<&SyncPlan> {
        match self {
            Self::NoConfig => None,
            Self::Written(plan) | Self::UpToDate(plan) | Self::DryRun(plan) => Some(plan),
        }
    }
}

/// Compute the sync for `config` without writing.
///
/// Returns `Ok(None)` when the site config is absent or empty.
pub fn plan(config: &SyncConfig) -> Result<Option<SyncPlan>> {
    let config_path = config.config_path();
    let Some(site) = SiteFile::load(&config_path, &config.nav_key)? else {
        debug!("nav"; "no site config at {}, nothing to do", config_path.display());
        return Ok(None);
    };

    let pages_path = config.pages_path();
    let index = FrontMatterIndex::scan(&pages_path, config.extension())?;
    debug!("scan"; "{} pages under {}", index.len(), pages_path.display());

    let (navigation, summary) = nav::merge_with_summary(&site.navigation, &index)?;
    let rewrite = nav::rewrite(&site.raw, &config.nav_key, &navigation)?;

    Ok(Some(SyncPlan {
        config_path: site.path,
        original: site.raw,
        updated: rewrite.text,
        summary,
        replaced: rewrite.replaced,
    }))
}

/// Plan the sync and apply it according to `mode`.
///
/// - `Write`: rewrite the config if it changed.
/// - `DryRun`: print the updated config to `out`, write nothing.
/// - `Check`: write nothing, fail if the config is out of date.
pub fn run(config: &SyncConfig, mode: SyncMode, out: &mut impl Write) -> Result<SyncOutcome> {
    let Some(plan) = plan(config)? else {
        return Ok(SyncOutcome::NoConfig);
    };

    if !plan.replaced {
        log!("warning"; "no `{}:` line in {}, leaving it untouched",
            config.nav_key, plan.config_path.display());
    }
    log_summary(&plan.summary);

    let path = plan.config_path.display();
    match mode {
        SyncMode::Write => {
            if plan.write()? {
                log!("nav"; "updated {path}");
                Ok(SyncOutcome::Written(plan))
            } else {
                debug!("nav"; "{path} is up to date");
                Ok(SyncOutcome::UpToDate(plan))
            }
        }
        SyncMode::DryRun => {
            out.write_all(plan.updated.as_bytes())
                .and_then(|()| out.flush())
                .context("failed to print the updated config")?;
            Ok(SyncOutcome::DryRun(plan))
        }
        SyncMode::Check => {
            if plan.is_changed() {
                bail!("{path} is out of date, run navsync to update it");
            }
            log!("nav"; "{path} is up to date");
            Ok(SyncOutcome::UpToDate(plan))
        }
    }
}

/// Update the navigation list of the site at `base_dir` in place, using
/// default settings (`_config.yml`, `pages/**/*.md`, `navigation`).
///
/// A missing or empty `_config.yml` is a silent no-op.
pub fn update_navigation_configuration(base_dir: &Path) -> Result<SyncOutcome> {
    run(&SyncConfig::for_root(base_dir), SyncMode::Write, &mut io::sink())
}

/// Log what the merge did: one summary line, details with --verbose.
fn log_summary(summary: &MergeSummary) {
    for title in &summary.appended {
        debug!("nav"; "added {title}");
    }
    for (parent, child) in &summary.appended_children {
        debug!("nav"; "added {child} under {parent}");
    }

    if summary.added() > 0 {
        log!("nav"; "{} new, {} refreshed (new entries may need reordering)",
            summary.added(), summary.refreshed());
    } else {
        debug!("nav"; "{} refreshed", summary.refreshed());
    }
}
