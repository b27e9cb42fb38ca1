//! Command implementations for areasync.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod areas;
mod check;
mod sync;


use crate::cli::Command;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Sync(args) => sync::cmd_sync(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Areas(args) => areas::cmd_areas(args),
    }
}

/// Directory that manifest entry paths are relative to.
fn manifest_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
