//! # Logger
//!
//! Installs the process-wide tracing subscriber: a compact console layer,
//! an optional rolling file layer (plain text or JSON) written through a
//! non-blocking worker, and an env filter that `RUST_LOG` overrides.
//!
//! ```rust
//! use sdui_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("sdui-server").level(LevelFilter::DEBUG).init().unwrap();
//! tracing::debug!("ready");
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use sdui_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global subscriber.
#[derive(Debug)]
#[must_use = "The logger is not installed until you call .init()"]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    dir: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    filter: Option<String>,
}

impl LoggerBuilder {
    /// Starts from the `[logging]` config section.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] when `level` is not a tracing level.
    pub fn from_config(name: impl Into<String>, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = LevelFilter::from_str(config.level.trim())
            .map_err(|_| LoggerError::invalid(format!("Unknown log level '{}'", config.level)))?;

        let mut builder = Logger::builder(name).level(level).json(config.json).max_files(config.max_files);
        builder.filter.clone_from(&config.filter);
        builder.dir.clone_from(&config.dir);
        Ok(builder)
    }

    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives such as `sdui=debug,tower_http=info`.
    ///
    /// `RUST_LOG` still wins when set. Invalid directives fail [`init`](Self::init).
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes rolling log files named `<name>.<date>.log` into `dir`.
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// JSON lines in the log files; the console stays human-readable.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive: dropping it stops the file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, zero `max_files`,
    ///   bad filter directives or no enabled output.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] when the log
    ///   directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.env_filter_layer()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.dir {
            Some(dir) => {
                fs::create_dir_all(dir).map_err(|source| LoggerError::Directory {
                    source,
                    context: Some(dir.display().to_string().into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("No logging output enabled; enable the console or set a directory"));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn env_filter_layer(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match (&self.filter, std::env::var_os(EnvFilter::DEFAULT_ENV)) {
            (_, Some(_)) | (None, None) => Ok(builder.from_env_lossy()),
            (Some(directives), None) => builder
                .parse(directives)
                .map_err(|e| LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))),
        }
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// New builder; `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            dir: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            filter: None,
        }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_maps_every_field() {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            filter: Some("sdui=trace".to_owned()),
            json: true,
            dir: Some(PathBuf::from("logs")),
            max_files: 3,
        };

        let builder = LoggerBuilder::from_config("sdui-server", &config).expect("valid config");
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert_eq!(builder.filter.as_deref(), Some("sdui=trace"));
        assert!(builder.json);
        assert_eq!(builder.dir.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!(builder.max_files, 3);
        assert!(builder.console);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
        let err = LoggerBuilder::from_config("sdui-server", &config).expect_err("bad level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn validation_runs_before_installing() {
        let err = Logger::builder(" ").init().expect_err("blank name");
        assert!(err.to_string().contains("Logger name cannot be empty"));

        let err = Logger::builder("sdui").max_files(0).init().expect_err("zero files");
        assert!(err.to_string().contains("max_files"));

        let err = Logger::builder("sdui").console(false).init().expect_err("no output");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
