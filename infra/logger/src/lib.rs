//! # Logger
//!
//! Installs the global `tracing` subscriber for Folio binaries.
//!
//! * Console output on stderr in compact, pretty or JSON form.
//! * Optional rolling file output through a non-blocking writer; the returned [`Logger`]
//!   owns the worker guard and must outlive the program's last log line.
//! * A default level plus optional directives (`folio_kernel=debug`), with `RUST_LOG`
//!   taking over when no directives are given.
//!
//! The builder is typestate-checked: a name is required before [`LoggerBuilder::init`]
//! exists, and file-only settings exist only after [`LoggerBuilder::path`].
//!
//! ## Example
//!
//! ```rust
//! # use folio_logger::{LevelFilter, LogFormat, Logger};
//! let _logger = Logger::builder()
//!     .name("folio")
//!     .format(LogFormat::Compact)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//!
//! tracing::debug!("ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Line format for console and file output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(LoggerError::InvalidConfiguration {
                message: format!("unknown log format '{other}'").into(),
                context: Some("expected compact, pretty or json".into()),
            }),
        }
    }
}

#[derive(Debug)]
struct Settings {
    console: bool,
    format: LogFormat,
    level: LevelFilter,
    directives: Option<String>,
    path: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            format: LogFormat::default(),
            level: LevelFilter::INFO,
            directives: None,
            path: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Configures the global subscriber. Obtain one with [`Logger::builder`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    output: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the application; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), output: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Extra filter directives such as `folio_kernel=debug,folio_event_bus=trace`.
    ///
    /// When set, `RUST_LOG` is ignored. Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "the builder does nothing until `init` is called"]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.settings.format = format;
        self
    }

    /// Adds rolling file output under `path`, created if missing.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut settings = self.settings;
        settings.path = Some(path.into());
        LoggerBuilder { settings, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// - [`LoggerError::InvalidConfiguration`] for an empty name, zero retained files,
    ///   bad directives, or when neither console nor file output is enabled.
    /// - [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory or file
    ///   cannot be prepared.
    /// - [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name), .. } = self;
        validate(&settings, &name)?;
        let filter = env_filter(&settings)?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if settings.console {
            layers.push(console_layer(settings.format));
        }

        let guard = match &settings.path {
            Some(path) => {
                fs::create_dir_all(path)
                    .context(format!("creating log directory {}", path.display()))?;
                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(path)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(match settings.format {
                    LogFormat::Json => file.json().boxed(),
                    LogFormat::Compact | LogFormat::Pretty => file.boxed(),
                });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; enable the console or set a path".into(),
                context: Some(name.into()),
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, format = ?settings.format, "Logger installed");

        Ok(Logger { name, guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// How many rotated files to keep.
    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }
}

/// Handle to the installed subscriber.
///
/// Holds the file writer's worker guard; dropping the handle flushes pending lines.
#[must_use = "dropping the Logger stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "the builder does nothing until `init` is called"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, output: PhantomData }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_file(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!(logger = %self.name, "Flushing log files");
        }
    }
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let console = layer().with_writer(std::io::stderr).with_target(true);
    match format {
        LogFormat::Compact => console.compact().boxed(),
        LogFormat::Pretty => console.pretty().boxed(),
        LogFormat::Json => console.json().boxed(),
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.path.is_some() && settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: Some(name.to_owned().into()),
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|err| {
            LoggerError::InvalidConfiguration {
                message: format!("invalid filter directives '{directives}': {err}").into(),
                context: None,
            }
        }),
    }
}
