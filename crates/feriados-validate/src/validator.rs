//! Strict validation of the raw holiday table.

use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame, DataType, TimeUnit};
use tracing::debug;

use feriados_model::{ColumnKind, ColumnSpec, HOLIDAY_SCHEMA, RawTable};

use crate::coerce::{to_text, to_timestamp};
use crate::error::SchemaValidationError;

/// A holiday table that passed schema validation.
///
/// Only [`validate`] constructs it, so holding one proves the frame has the
/// schema columns, in schema order, with no nulls.
#[derive(Debug, Clone)]
pub struct ValidatedTable {
    data: DataFrame,
}

impl ValidatedTable {
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn into_inner(self) -> DataFrame {
        self.data
    }
}

/// Validate against [`HOLIDAY_SCHEMA`].
pub fn validate(raw: &RawTable) -> Result<ValidatedTable, SchemaValidationError> {
    validate_against(raw, HOLIDAY_SCHEMA)
}

/// Validate against an arbitrary closed schema.
pub fn validate_against(
    raw: &RawTable,
    schema: &[ColumnSpec],
) -> Result<ValidatedTable, SchemaValidationError> {
    check_headers(raw, schema)?;

    let mut columns = Vec::with_capacity(schema.len());
    for def in schema {
        let index = raw
            .column_index(def.name)
            .ok_or_else(|| SchemaValidationError::MissingColumn {
                column: def.name.to_string(),
            })?;
        columns.push(coerce_column(raw, index, def)?);
    }
    let data = DataFrame::new(columns)?;
    debug!(
        row_count = data.height(),
        column_count = data.width(),
        "schema validation passed"
    );
    Ok(ValidatedTable { data })
}

fn check_headers(raw: &RawTable, schema: &[ColumnSpec]) -> Result<(), SchemaValidationError> {
    let declared: BTreeSet<&str> = schema.iter().map(|def| def.name).collect();
    let mut seen = BTreeSet::new();
    for header in &raw.headers {
        let name = header.trim();
        if !seen.insert(name) {
            return Err(SchemaValidationError::DuplicateColumn {
                column: name.to_string(),
            });
        }
    }
    for def in schema {
        if !seen.contains(def.name) {
            return Err(SchemaValidationError::MissingColumn {
                column: def.name.to_string(),
            });
        }
    }
    if let Some(extra) = seen.iter().find(|name| !declared.contains(*name)) {
        return Err(SchemaValidationError::UnexpectedColumn {
            column: (*extra).to_string(),
        });
    }
    Ok(())
}

fn coerce_column(
    raw: &RawTable,
    index: usize,
    def: &ColumnSpec,
) -> Result<Column, SchemaValidationError> {
    match def.kind {
        ColumnKind::Timestamp => {
            let values = coerce_values(raw, index, def, |cell| {
                to_timestamp(cell).map(|value| value.and_utc().timestamp_millis())
            })?;
            let column = Column::new(def.name.into(), values)
                .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
            Ok(column)
        }
        ColumnKind::Text => {
            let values = coerce_values(raw, index, def, to_text)?;
            Ok(Column::new(def.name.into(), values))
        }
    }
}

/// Coerce every cell of one column; blank cells fail unless nullable.
fn coerce_values<T, F>(
    raw: &RawTable,
    index: usize,
    def: &ColumnSpec,
    convert: F,
) -> Result<Vec<Option<T>>, SchemaValidationError>
where
    F: Fn(&feriados_model::CellValue) -> Option<T>,
{
    let mut values = Vec::with_capacity(raw.row_count());
    for row in 0..raw.row_count() {
        let cell = raw.cell(row, index);
        if cell.is_blank() {
            if def.nullable {
                values.push(None);
                continue;
            }
            return Err(SchemaValidationError::NullValue {
                column: def.name.to_string(),
                row,
            });
        }
        let value = convert(cell).ok_or_else(|| SchemaValidationError::Coercion {
            column: def.name.to_string(),
            row,
            value: cell.to_string(),
            expected: def.kind.as_str(),
        })?;
        values.push(Some(value));
    }
    Ok(values)
}
