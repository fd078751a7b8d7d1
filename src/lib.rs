//! navsync - keep a site's navigation list in sync with page front matter.
//!
//! The binary is a thin wrapper around [`sync::run`]; the same pipeline is
//! available to other tools through [`sync::update_navigation_configuration`].

pub mod cli;
pub mod config;
pub mod logger;
pub mod nav;
pub mod page;
pub mod sync;
