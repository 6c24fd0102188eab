//! Cell coercion to declared column types.

use chrono::NaiveDateTime;

use feriados_common::{format_numeric, from_excel_serial, parse_date_text};
use feriados_model::CellValue;

/// Timestamp for a date cell. Numbers are Excel serial days.
pub(crate) fn to_timestamp(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::DateTime(value) => Some(*value),
        CellValue::Text(text) => parse_date_text(text),
        CellValue::Float(value) => from_excel_serial(*value),
        CellValue::Int(value) => from_excel_serial(*value as f64),
        CellValue::Bool(_) | CellValue::Empty => None,
    }
}

/// Trimmed text for a text cell. Booleans are rejected.
pub(crate) fn to_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(text) => Some(text.trim().to_string()),
        CellValue::Int(value) => Some(value.to_string()),
        CellValue::Float(value) => Some(format_numeric(*value)),
        CellValue::DateTime(value) => Some(value.format("%Y-%m-%dT%H:%M:%S").to_string()),
        CellValue::Bool(_) | CellValue::Empty => None,
    }
}
