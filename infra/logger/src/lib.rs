//! # Logger
//!
//! Tracing setup shared by the folio hosts.
//!
//! * The console layer always writes to **stderr**, so `folio render` can stream markup on stdout.
//! * A [`LogConfig`] from the host configuration adds filter directives and, optionally, a
//!   rolling file layer written through a non-blocking worker.
//! * `RUST_LOG` still applies when the configuration carries no filter.
//!
//! ## Example
//!
//! ```rust
//! use folio_domain::config::LogConfig;
//! use folio_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("folio")
//!     .level(LevelFilter::DEBUG)
//!     .config(LogConfig::default())
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use folio_domain::config::{LogConfig, LogFileConfig, LogRotation};
use std::fs;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Collects host settings before installing the global subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    ansi: bool,
    config: LogConfig,
}

impl LoggerBuilder {
    /// Default level for targets the filter directives do not mention.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Toggles ANSI colors on the console layer.
    #[must_use]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.ansi = enabled;
        self
    }

    /// Applies the `[log]` section of a host configuration.
    #[must_use]
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file worker (if any) and must outlive all logging.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for a blank name, a bad filter or
    /// `max_files = 0`, [`LoggerError::Internal`]/[`LoggerError::Appender`] when the log
    /// directory cannot be prepared, and [`LoggerError::Subscriber`] if a global subscriber
    /// is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let filter = env_filter(self.level, self.config.filter.as_deref())?;

        let mut layers = vec![console_layer(self.ansi)];
        let guard = match &self.config.file {
            Some(file) => {
                let (file_layer, guard) = file_layer(&self.name, file)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        tracing::debug!(name = %self.name, files = guard.is_some(), "Logger installed");
        Ok(Logger { guard })
    }
}

/// Keeps the non-blocking file worker alive; drop it only on shutdown.
#[must_use = "Dropping this handle stops the file logging worker."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolling log files (`folio.2026-10-19.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            ansi: true,
            config: LogConfig::default(),
        }
    }

    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

fn console_layer<S>(ansi: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    layer().compact().with_ansi(ansi).with_writer(std::io::stderr).boxed()
}

fn file_layer<S>(name: &str, config: &LogFileConfig) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: Some(format!("log directory {}", config.dir.display()).into()),
        });
    }

    fs::create_dir_all(&config.dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create path: {}", config.dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(rotation(config.rotation))
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(&config.dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = if config.json { base.json().boxed() } else { base.boxed() };
    Ok((boxed, guard))
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

fn env_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid log filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}
