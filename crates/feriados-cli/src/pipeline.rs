//! Holiday export pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: load the raw table from the configured source
//! 2. **Validate**: check headers and coerce values against the holiday schema
//! 3. **Derive**: build the `pt_br` and `en` variants
//! 4. **Export**: write every variant in both date encodings and all formats
//! 5. **Index**: list the output directory and render the index page
//!
//! Fatal errors are logged once and returned; per-format export failures
//! are collected in the [`ExportReport`]s of the outcome.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use chrono::{Datelike, Utc};
use tracing::{debug, error, info, info_span};

use feriados_ingest::{HttpSpreadsheetSource, TableSource};
use feriados_model::Settings;
use feriados_output::{
    ExportReport, Exporter, HtmlIndexWriter, IndexGenerator, list_output_files,
};
use feriados_transform::{DateEncoding, derive_variants};
use feriados_validate::validate;

use crate::error::PipelineError;

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Fetching,
    Validating,
    Deriving,
    Exporting,
    Indexing,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PipelineState::Idle => "idle",
            PipelineState::Fetching => "fetching",
            PipelineState::Validating => "validating",
            PipelineState::Deriving => "deriving",
            PipelineState::Exporting => "exporting",
            PipelineState::Indexing => "indexing",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    /// UTC calendar year at completion.
    pub year: i32,
    /// Validated row count.
    pub rows: usize,
    /// One report per variant and encoding, in export order.
    pub reports: Vec<ExportReport>,
}

impl RunOutcome {
    pub fn failure_count(&self) -> usize {
        self.reports.iter().map(|report| report.failures.len()).sum()
    }
}

pub struct Pipeline {
    source: Box<dyn TableSource>,
    exporter: Exporter,
    index: Box<dyn IndexGenerator>,
    state: PipelineState,
    failed_at: Option<PipelineState>,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn TableSource>,
        exporter: Exporter,
        index: Box<dyn IndexGenerator>,
    ) -> Self {
        Self {
            source,
            exporter,
            index,
            state: PipelineState::Idle,
            failed_at: None,
        }
    }

    /// HTTP spreadsheet source, default writers and the HTML index page.
    pub fn from_settings(settings: &Settings) -> Result<Self, PipelineError> {
        let source = HttpSpreadsheetSource::from_settings(settings)?;
        let exporter = Exporter::new(&settings.output_dir, settings.export_formats.clone());
        let index = HtmlIndexWriter::new(&settings.index_path);
        Ok(Self::new(Box::new(source), exporter, Box::new(index)))
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Stage that was running when the last run failed.
    pub fn failed_at(&self) -> Option<PipelineState> {
        self.failed_at
    }

    pub fn output_dir(&self) -> &Path {
        self.exporter.output_dir()
    }

    /// Run every stage once and return the completion year.
    pub fn run(&mut self) -> Result<RunOutcome, PipelineError> {
        let start = Instant::now();
        self.state = PipelineState::Idle;
        self.failed_at = None;
        match self.run_stages() {
            Ok(outcome) => {
                self.state = PipelineState::Done;
                info!(
                    year = outcome.year,
                    rows = outcome.rows,
                    exports = outcome.reports.len(),
                    failures = outcome.failure_count(),
                    duration_ms = start.elapsed().as_millis(),
                    "pipeline complete"
                );
                Ok(outcome)
            }
            Err(err) => {
                error!(stage = %self.state, error = %err, "pipeline failed");
                self.failed_at = Some(self.state);
                self.state = PipelineState::Failed;
                Err(err)
            }
        }
    }

    fn run_stages(&mut self) -> Result<RunOutcome, PipelineError> {
        self.state = PipelineState::Fetching;
        let origin = self.source.describe();
        let raw = info_span!("ingest", source = %origin).in_scope(|| self.source.load())?;
        info!(source = %origin, rows = raw.row_count(), "raw table loaded");

        self.state = PipelineState::Validating;
        let validated = info_span!("validate").in_scope(|| validate(&raw))?;
        info!(rows = validated.height(), "schema validation passed");

        self.state = PipelineState::Deriving;
        let variants = info_span!("derive").in_scope(|| derive_variants(&validated))?;

        self.state = PipelineState::Exporting;
        let mut reports = Vec::with_capacity(variants.len() * DateEncoding::ALL.len());
        for variant in variants.values() {
            for encoding in DateEncoding::ALL {
                let span = info_span!("export", variant = %variant.key(), encoding = encoding.suffix());
                let _guard = span.enter();
                let data = variant.encode(encoding)?;
                reports.push(self.exporter.export(&data, &variant.export_name(encoding)));
            }
        }

        self.state = PipelineState::Indexing;
        info_span!("index").in_scope(|| {
            let entries = list_output_files(self.exporter.output_dir())?;
            debug!(entries = entries.len(), "output directory listed");
            self.index.generate(&entries)
        })?;

        Ok(RunOutcome {
            year: Utc::now().year(),
            rows: validated.height(),
            reports,
        })
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("source", &self.source.describe())
            .field("exporter", &self.exporter)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
