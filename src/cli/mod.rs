//! Command-line interface module.

mod args;

pub use args::{Cli, SyncMode};
