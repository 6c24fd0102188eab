use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("column {column:?} not found")]
    MissingColumn { column: String },

    #[error("column {column:?} has type {dtype}, expected a datetime")]
    DateColumnType { column: String, dtype: String },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
