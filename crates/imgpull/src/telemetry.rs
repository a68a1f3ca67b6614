//! Logging context for a single run.
//!
//! The subscriber is built once in `main` and installed as the thread's
//! default for as long as the returned [`Telemetry`] lives. Nothing is
//! registered process-wide.

use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default level when none is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/log.txt";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive (`info`, `debug`, `imgpull=trace`, ...).
    pub level: String,
    /// Plain-text copy of every event; `None` disables it.
    pub log_file: Option<PathBuf>,
    /// Human-readable events on stderr.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            console: true,
        }
    }
}

/// Keeps the run's subscriber installed until dropped.
pub struct Telemetry {
    _guard: DefaultGuard,
}

impl Telemetry {
    /// Build and install the subscriber described by `config`.
    ///
    /// An unusable log file is not fatal: the run continues with console
    /// output and a warning is emitted once the subscriber is live. The
    /// console layer is forced on in that case so events still reach a sink.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.level` is not a valid filter directive.
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let filter = EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level '{}'", config.level))?;

        let (file_layer, file_error) = match config.log_file.as_deref().map(open_log_file) {
            Some(Ok(file)) => {
                let layer = fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file));
                (Some(layer), None)
            }
            Some(Err(err)) => (None, Some(err)),
            None => (None, None),
        };

        let console = console_enabled(config, file_error.is_some()).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
        });

        let guard = tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(file_layer)
            .set_default();

        if let Some(err) = file_error {
            tracing::warn!("log file disabled: {err:#}");
        }

        Ok(Self { _guard: guard })
    }
}

fn console_enabled(config: &LoggingConfig, file_failed: bool) -> bool {
    config.console || file_failed
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        imgpull_fs::ensure_dir(parent)?;
    }
    File::create(path).with_context(|| format!("cannot open {}", path.display()))
}
