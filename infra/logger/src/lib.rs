//! # Logger
//!
//! Subscriber setup shared by the Aqua binaries: a compact console layer, an optional
//! rolling file layer (plain text or JSON) written through a non-blocking worker, and
//! `RUST_LOG`-aware filtering.
//!
//! ## Example
//!
//! ```rust
//! # use aqua_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("favicon-generator")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Rolling file output settings.
#[derive(Debug, Clone)]
struct FileSink {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSink>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

/// Builder state before a name was given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once the logger has a name.
#[derive(Debug)]
pub struct Named(String);

/// Configures and installs the global tracing subscriber.
///
/// The name is required before [`LoggerBuilder::init`] becomes available; it prefixes
/// rolling log files (e.g. `favicon-generator.2026-10-19.log`).
#[derive(Debug)]
#[must_use = "The builder does nothing until `init()` is called."]
pub struct LoggerBuilder<N = Unnamed> {
    name: N,
    config: LoggerConfig,
}

impl LoggerBuilder<Unnamed> {
    /// Sets the logger name.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { name: Named(name.into()), config: self.config }
    }
}

impl<N> LoggerBuilder<N> {
    /// Enables or disables the console layer.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Minimum level used when `RUST_LOG` and [`Self::env_filter`] say nothing.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `aqua_kernel=debug,resvg=warn`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Writes logs into `dir` with daily rotation.
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.file = Some(FileSink {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Changes the rotation of the file sink. No-op without [`Self::path`].
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Caps the number of rotated files kept. No-op without [`Self::path`].
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Emits the file sink as JSON lines. No-op without [`Self::path`].
    pub fn json(mut self) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.json = true;
        }
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file worker guard; keep it alive until shutdown.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad
    ///   filter or when no layer is enabled.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] when the log directory
    ///   cannot be prepared.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        validate(&self.config, &name)?;

        let filter = env_filter(&self.config)?;
        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_target(false).with_ansi(true).boxed());
        }

        let guard = match self.config.file {
            Some(sink) => {
                fs::create_dir_all(&sink.dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Creating {}", sink.dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(sink.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(sink.max_files)
                    .build(&sink.dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if sink.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber; flushes file output on drop.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { name: Unnamed, config: LoggerConfig::default() }
    }

    /// `true` when a file sink is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing file logs");
        }
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.file.as_ref().is_some_and(|f| f.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match config.env_filter.as_deref() {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}
