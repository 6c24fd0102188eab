use feriados_ingest::IngestError;
use feriados_model::ConfigError;
use feriados_output::ExportError;
use feriados_transform::TransformError;
use feriados_validate::SchemaValidationError;
use thiserror::Error;

/// Fatal pipeline failure. Per-format export failures never end up here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load holiday table: {0}")]
    Ingest(#[from] IngestError),

    #[error("holiday table failed validation: {0}")]
    Schema(#[from] SchemaValidationError),

    #[error("failed to derive variants: {0}")]
    Transform(#[from] TransformError),

    #[error("failed to build index page: {0}")]
    Index(#[from] ExportError),
}
