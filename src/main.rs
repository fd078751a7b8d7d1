//! navsync - keep a site's navigation list in sync with page front matter.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use navsync::{cli::Cli, config::SyncConfig, sync};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SyncConfig::load(&cli)?;
    sync::run(&config, cli.mode(), &mut io::stdout().lock())?;
    Ok(())
}
