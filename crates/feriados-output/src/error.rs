use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failure writing one artifact. Recovered per format by the exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Polars {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("failed to serialize JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write XML {path}: {message}")]
    Xml { path: PathBuf, message: String },

    #[error("frame for {path} has no date column")]
    MissingDateColumn { path: PathBuf },

    #[error("failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn polars(path: impl Into<PathBuf>, source: PolarsError) -> Self {
        Self::Polars {
            path: path.into(),
            source,
        }
    }
}
