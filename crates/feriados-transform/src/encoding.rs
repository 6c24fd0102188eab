//! Date-encoding sub-variants used for export.

use polars::prelude::{Column, DataFrame, DataType};

use feriados_common::{any_to_datetime, unix_seconds};

use crate::error::TransformError;

/// How the date column is represented in an exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEncoding {
    /// Calendar date, no time component.
    Date,
    /// Integer seconds since 1970-01-01T00:00:00Z.
    Unix,
}

impl DateEncoding {
    pub const ALL: [DateEncoding; 2] = [DateEncoding::Date, DateEncoding::Unix];

    /// File name suffix (`date` or `unix`).
    pub fn suffix(self) -> &'static str {
        match self {
            DateEncoding::Date => "date",
            DateEncoding::Unix => "unix",
        }
    }
}

/// Copy `data` with `date_column` re-encoded.
pub fn encode_dates(
    data: &DataFrame,
    date_column: &str,
    encoding: DateEncoding,
) -> Result<DataFrame, TransformError> {
    let column = data
        .column(date_column)
        .map_err(|_| TransformError::MissingColumn {
            column: date_column.to_string(),
        })?;
    if !matches!(column.dtype(), DataType::Datetime(..)) {
        return Err(TransformError::DateColumnType {
            column: date_column.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let encoded = match encoding {
        DateEncoding::Date => column.cast(&DataType::Date)?,
        DateEncoding::Unix => {
            let mut seconds: Vec<Option<i64>> = Vec::with_capacity(column.len());
            for idx in 0..column.len() {
                seconds.push(any_to_datetime(column.get(idx)?).map(unix_seconds));
            }
            Column::new(date_column.into(), seconds)
        }
    };
    let mut copy = data.clone();
    copy.with_column(encoded)?;
    Ok(copy)
}
