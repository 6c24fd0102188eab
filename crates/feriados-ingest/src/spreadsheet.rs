//! Workbook decoding into a [`RawTable`].

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use feriados_common::parse_date_text;
use feriados_model::{CellValue, RawTable};

use crate::error::IngestError;

/// Decode the first worksheet of an `.xls`/`.xlsx`/`.ods` workbook.
///
/// The first row is the header; the last `trailer_rows` data rows are
/// discarded. The trailer count is positional: it assumes the publisher's
/// footnote block keeps its length.
pub fn decode_workbook(bytes: Vec<u8>, trailer_rows: usize) -> Result<RawTable, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|source| IngestError::Workbook { source })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoWorksheet)?
        .map_err(|source| IngestError::Workbook { source })?;
    let mut table = table_from_rows(range.rows())?;
    let decoded_rows = table.row_count();
    table.drop_trailer(trailer_rows);
    debug!(
        decoded_rows,
        kept_rows = table.row_count(),
        trailer_rows,
        column_count = table.headers.len(),
        "worksheet decoded"
    );
    Ok(table)
}

/// Build a table from worksheet rows, the first row being the header.
pub fn table_from_rows<'a, I>(mut rows: I) -> Result<RawTable, IngestError>
where
    I: Iterator<Item = &'a [Data]>,
{
    let header = rows.next().ok_or(IngestError::MissingHeader)?;
    let headers = header.iter().map(header_name).collect();
    let rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    Ok(RawTable::new(headers, rows))
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => value
            .as_datetime()
            .map_or_else(|| CellValue::Float(value.as_f64()), CellValue::DateTime),
        Data::DateTimeIso(text) => {
            parse_date_text(text).map_or_else(|| CellValue::Text(text.clone()), CellValue::DateTime)
        }
        Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(error) => CellValue::Text(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn first_row_becomes_header() {
        let rows = vec![
            vec![text(" Data "), text("Dia da Semana"), text("Feriado")],
            vec![
                Data::DateTimeIso("2024-01-01T00:00:00".to_string()),
                text("segunda-feira"),
                text("Confraternização Universal"),
            ],
        ];
        let table = table_from_rows(rows.iter().map(Vec::as_slice)).unwrap();
        assert_eq!(table.headers, vec!["Data", "Dia da Semana", "Feriado"]);
        assert_eq!(table.row_count(), 1);
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(table.cell(0, 0), &CellValue::DateTime(expected));
        assert_eq!(table.cell(0, 1), &CellValue::Text("segunda-feira".to_string()));
    }

    #[test]
    fn empty_sheet_has_no_header() {
        let rows: Vec<Vec<Data>> = Vec::new();
        let error = table_from_rows(rows.iter().map(Vec::as_slice)).unwrap_err();
        assert!(matches!(error, IngestError::MissingHeader));
    }

    #[test]
    fn scalar_cells_are_preserved() {
        let rows = vec![
            vec![text("A"), Data::Empty],
            vec![Data::Float(45_292.0), Data::Int(7)],
            vec![Data::Bool(true), Data::Empty],
        ];
        let table = table_from_rows(rows.iter().map(Vec::as_slice)).unwrap();
        assert_eq!(table.headers, vec!["A", ""]);
        assert_eq!(table.cell(0, 0), &CellValue::Float(45_292.0));
        assert_eq!(table.cell(0, 1), &CellValue::Int(7));
        assert_eq!(table.cell(1, 0), &CellValue::Bool(true));
        assert!(table.cell(1, 1).is_blank());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let error = decode_workbook(b"not a workbook".to_vec(), 10).unwrap_err();
        assert!(matches!(error, IngestError::Workbook { .. }));
    }
}
