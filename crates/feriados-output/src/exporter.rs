//! Multi-format export of one frame with per-format failure isolation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use crate::error::ExportError;
use crate::registry::WriterRegistry;
use crate::sidecar::write_excel_sidecar;

/// Base names ending with this suffix carry epoch seconds and get no sidecar.
pub const UNIX_SUFFIX: &str = "_unix";

/// Suffix of the Excel serial sidecar file name.
pub const SIDECAR_SUFFIX: &str = "_xl";

/// One artifact that could not be written.
#[derive(Debug)]
pub struct ExportFailure {
    /// Format identifier, or `sidecar`.
    pub format: String,
    pub path: PathBuf,
    pub error: ExportError,
}

/// Outcome of exporting one frame.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub base_name: String,
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
    /// Configured identifiers with no registered writer.
    pub skipped: Vec<String>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes frames to `<output_dir>/<base_name>.<ext>` for every configured format.
#[derive(Debug)]
pub struct Exporter {
    output_dir: PathBuf,
    formats: Vec<String>,
    registry: WriterRegistry,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, formats: Vec<String>) -> Self {
        Self::with_registry(output_dir, formats, WriterRegistry::with_defaults())
    }

    pub fn with_registry(
        output_dir: impl Into<PathBuf>,
        formats: Vec<String>,
        registry: WriterRegistry,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            formats,
            registry,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    pub fn registry_mut(&mut self) -> &mut WriterRegistry {
        &mut self.registry
    }

    /// Export `data` in every configured format.
    ///
    /// Never fails as a whole: each write is attempted independently and
    /// failures are collected in the report. The Excel sidecar is written
    /// only when at least one configured format was recognized.
    pub fn export(&self, data: &DataFrame, base_name: &str) -> ExportReport {
        let mut report = ExportReport {
            base_name: base_name.to_string(),
            ..ExportReport::default()
        };

        let mut recognized = 0usize;
        for format in &self.formats {
            let Some(writer) = self.registry.get(format) else {
                debug!(format = %format, base_name, "unrecognized export format skipped");
                report.skipped.push(format.clone());
                continue;
            };
            recognized += 1;
            let path = self
                .output_dir
                .join(format!("{base_name}.{}", writer.extension()));
            let start = Instant::now();
            match writer.write(data, &path) {
                Ok(()) => {
                    debug!(
                        format = %format,
                        path = %path.display(),
                        rows = data.height(),
                        duration_ms = start.elapsed().as_millis(),
                        "export written"
                    );
                    report.written.push(path);
                }
                Err(error) => {
                    warn!(format = %format, path = %path.display(), %error, "export failed");
                    report.failures.push(ExportFailure {
                        format: format.clone(),
                        path,
                        error,
                    });
                }
            }
        }

        // The sidecar accompanies date exports only.
        if recognized > 0 && !base_name.ends_with(UNIX_SUFFIX) {
            let path = self
                .output_dir
                .join(format!("{base_name}{SIDECAR_SUFFIX}.txt"));
            match write_excel_sidecar(data, &path) {
                Ok(count) => {
                    debug!(path = %path.display(), count, "excel sidecar written");
                    report.written.push(path);
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "excel sidecar failed");
                    report.failures.push(ExportFailure {
                        format: "sidecar".to_string(),
                        path,
                        error,
                    });
                }
            }
        }

        info!(
            base_name,
            written = report.written.len(),
            failed = report.failures.len(),
            skipped = report.skipped.len(),
            "export complete"
        );
        report
    }
}
