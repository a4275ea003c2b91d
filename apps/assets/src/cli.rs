//! # CLI plumbing
//!
//! Environment overrides, site-root discovery and logging setup shared by the asset binaries.

use anyhow::{Context, Result};
use aqua_logger::{LevelFilter, Logger};
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the site root the tools read from and write to.
pub const SITE_ROOT_ENV: &str = "AQUA_SITE_ROOT";
/// Enables rolling file logs in the given directory.
pub const LOG_DIR_ENV: &str = "AQUA_LOG_DIR";

/// Site root: `AQUA_SITE_ROOT` when set, the workspace root otherwise.
///
/// # Errors
/// Returns an error if the manifest directory has no workspace ancestor.
pub fn site_root() -> Result<PathBuf> {
    if let Some(root) = env::var_os(SITE_ROOT_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root));
    }

    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .context("Could not find the site root from the assets manifest")
}

/// Warnings on the console so progress lines stay readable; with `AQUA_LOG_DIR` the full
/// info stream goes to files instead.
///
/// # Errors
/// Returns an error when the global subscriber cannot be installed.
pub fn init_logging(name: &str) -> Result<Logger> {
    let builder = Logger::builder().name(name).level(LevelFilter::WARN);
    let builder = match env::var_os(LOG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => builder.console(false).path(dir).level(LevelFilter::INFO),
        _ => builder,
    };

    builder.init().context("Failed to initialize logging")
}
