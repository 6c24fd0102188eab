use polars::prelude::PolarsError;
use thiserror::Error;

/// The incoming table does not match the declared schema.
///
/// Rows are zero-based data row indexes (the header is not counted).
#[derive(Debug, Error)]
pub enum SchemaValidationError {
    #[error("missing required column {column:?}")]
    MissingColumn { column: String },

    #[error("unexpected column {column:?} (schema is strict)")]
    UnexpectedColumn { column: String },

    #[error("duplicate column {column:?}")]
    DuplicateColumn { column: String },

    #[error("column {column:?} has an empty value in row {row}")]
    NullValue { column: String, row: usize },

    #[error("column {column:?} row {row}: cannot coerce {value:?} to {expected}")]
    Coercion {
        column: String,
        row: usize,
        value: String,
        expected: &'static str,
    },

    #[error("failed to build validated frame: {source}")]
    Frame {
        #[from]
        source: PolarsError,
    },
}

impl SchemaValidationError {
    /// Column the failure refers to, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            SchemaValidationError::MissingColumn { column }
            | SchemaValidationError::UnexpectedColumn { column }
            | SchemaValidationError::DuplicateColumn { column }
            | SchemaValidationError::NullValue { column, .. }
            | SchemaValidationError::Coercion { column, .. } => Some(column),
            SchemaValidationError::Frame { .. } => None,
        }
    }
}
