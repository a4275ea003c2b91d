use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file stem, resolved against the working directory.
pub const DEFAULT_CONFIG: &str = "site";

/// Layered configuration loader.
///
/// 1. **Base File**: `path` (or `site.{toml,json,yaml}`), optional; missing files fall back to
///    the type's defaults.
/// 2. **Environment Overrides**: variables prefixed with `AQUA__`, nested keys separated by
///    `__` (e.g. `AQUA__TIMING__NOTIFICATION_TTL_MS=8000`).
///
/// # Errors
/// Returns [`KernelError::Config`] when a source is malformed or does not match `T`.
///
/// # Example
/// ```rust
/// use aqua_domain::config::SiteConfig;
/// use aqua_kernel::config::load_config;
///
/// let cfg: SiteConfig = load_config(Some("does-not-exist")).unwrap_or_default();
/// assert_eq!(cfg.timing.notification_ttl_ms, 5000);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(Environment::with_prefix("AQUA").separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
