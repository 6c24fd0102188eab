//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Events go to stderr and, when a log file is configured, are appended to
//! it as well. The file is rotated before opening once it grows past
//! [`MAX_LOG_BYTES`], keeping [`ROTATED_LOG_FILES`] older generations
//! (`data_update.log.1` is the most recent).
//!
//! # Log Levels
//!
//! - `error`: fatal pipeline failures
//! - `warn`: per-format export failures
//! - `info`: stage progress and counts
//! - `debug`: individual artifacts, skipped formats
//! - `trace`: HTTP and decoding internals

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Log file name inside the configured log directory.
pub const LOG_FILE_NAME: &str = "data_update.log";

/// Size above which the log file is rotated.
pub const MAX_LOG_BYTES: u64 = 5 * 1024 * 1024;

/// Rotated generations kept next to the active log file.
pub const ROTATED_LOG_FILES: usize = 3;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the default filter.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    /// Emit span close events (with durations) in JSON output.
    pub with_spans: bool,
    /// ANSI colors on stderr; the log file never gets them.
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Optional log file appended to in addition to stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_timestamps: true,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Set the log file path (stderr only when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Default log file path inside `log_dir`.
pub fn log_file_in(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Initialize the global tracing subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be rotated or opened, or if a
/// global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    layers.push(format_layer(config, io::stderr, config.with_ansi));
    if let Some(path) = &config.log_file {
        rotate_if_needed(path, MAX_LOG_BYTES, ROTATED_LOG_FILES)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        layers.push(format_layer(config, SharedFileWriter::new(file), false));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(build_env_filter(config))
        .try_init()
        .map_err(io::Error::other)
}

fn format_layer<W>(config: &LogConfig, writer: W, ansi: bool) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_span_events(if config.with_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            })
            .boxed(),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    }
}

/// Shift `path` to `path.1` (and older generations up by one) when it is
/// larger than `max_bytes`. Returns whether a rotation happened.
pub fn rotate_if_needed(path: &Path, max_bytes: u64, keep: usize) -> io::Result<bool> {
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(error) => return Err(error),
    };
    if size <= max_bytes || keep == 0 {
        return Ok(false);
    }

    let oldest = rotated_path(path, keep);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for generation in (1..keep).rev() {
        let from = rotated_path(path, generation);
        if from.exists() {
            fs::rename(&from, rotated_path(path, generation + 1))?;
        }
    }
    fs::rename(path, rotated_path(path, 1))?;
    Ok(true)
}

fn rotated_path(path: &Path, generation: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{generation}"));
    PathBuf::from(name)
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<fs::File>>,
}

impl SharedFileWriter {
    fn new(file: fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Filter for our crates at the configured level; `RUST_LOG` wins when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let default_filter = || {
        EnvFilter::new(format!(
            "{level},feriados_cli={level},feriados_common={level},feriados_ingest={level},\
             feriados_model={level},feriados_output={level},feriados_transform={level},\
             feriados_validate={level}",
            level = config.level_filter.to_string().to_lowercase()
        ))
    };
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter())
    } else {
        default_filter()
    }
}
