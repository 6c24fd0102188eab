//! Excel serial-date sidecar of date-encoded frames.

use std::path::Path;

use polars::prelude::{Column, DataFrame, DataType};

use feriados_common::{any_to_date, excel_serial};

use crate::error::ExportError;

/// Separator between serial values in the sidecar file.
pub const SIDECAR_SEPARATOR: &str = ";";

/// Excel serials of the first date column; `None` when the frame has none.
///
/// Null dates yield `None` entries.
pub fn excel_serials(data: &DataFrame) -> Option<Vec<Option<i64>>> {
    let column = date_column(data)?;
    let serials = (0..column.len())
        .map(|idx| {
            column
                .get(idx)
                .ok()
                .and_then(any_to_date)
                .map(excel_serial)
        })
        .collect();
    Some(serials)
}

/// Write the serials joined by `;` (nulls as empty fields). Returns the value count.
pub fn write_excel_sidecar(data: &DataFrame, path: &Path) -> Result<usize, ExportError> {
    let serials = excel_serials(data).ok_or_else(|| ExportError::MissingDateColumn {
        path: path.to_path_buf(),
    })?;
    let contents = serials
        .iter()
        .map(|serial| serial.map(|value| value.to_string()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(SIDECAR_SEPARATOR);
    std::fs::write(path, contents).map_err(|source| ExportError::io(path, source))?;
    Ok(serials.len())
}

fn date_column(data: &DataFrame) -> Option<&Column> {
    data.get_columns()
        .iter()
        .find(|column| matches!(column.dtype(), DataType::Date | DataType::Datetime(..)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_frame(days: Vec<Option<i32>>) -> DataFrame {
        DataFrame::new(vec![
            Column::new("holiday".into(), vec!["a"; days.len()]),
            Column::new("dt".into(), days).cast(&DataType::Date).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn serials_follow_first_date_column() {
        // 1970-01-01 and 2024-01-01
        let frame = date_frame(vec![Some(0), Some(19_723)]);
        assert_eq!(excel_serials(&frame), Some(vec![Some(25_569), Some(45_292)]));
    }

    #[test]
    fn frames_without_dates_have_no_serials() {
        let frame = DataFrame::new(vec![Column::new("dt".into(), vec![1_704_067_200i64])]).unwrap();
        assert_eq!(excel_serials(&frame), None);
    }

    #[test]
    fn sidecar_joins_with_semicolons() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feriados_en_date_xl.txt");
        let frame = date_frame(vec![Some(19_723), None, Some(19_724)]);
        let count = write_excel_sidecar(&frame, &path).unwrap();
        assert_eq!(count, 3);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "45292;;45293");
    }
}
