//! Integration tests for date-encoding sub-variants.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataType};

use feriados_model::{CellValue, RawTable};
use feriados_transform::{DateEncoding, TransformError, derive_variants, encode_dates};
use feriados_validate::{ValidatedTable, validate};

fn holiday_table() -> ValidatedTable {
    let at = |y, m, d| {
        CellValue::DateTime(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    };
    let rows = vec![
        vec![
            at(2024, 1, 1),
            CellValue::Text("segunda-feira".into()),
            CellValue::Text("Confraternização Universal".into()),
        ],
        vec![
            at(2024, 4, 21),
            CellValue::Text("domingo".into()),
            CellValue::Text("Tiradentes".into()),
        ],
        vec![
            at(2024, 12, 25),
            CellValue::Text("quarta-feira".into()),
            CellValue::Text("Natal".into()),
        ],
    ];
    let raw = RawTable::new(
        vec!["Data".into(), "Dia da Semana".into(), "Feriado".into()],
        rows,
    );
    validate(&raw).unwrap()
}

#[test]
fn derives_exactly_the_configured_variants() {
    let table = holiday_table();
    let variants = derive_variants(&table).unwrap();
    let keys: Vec<&str> = variants.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["feriados_en", "feriados_pt_br"]);
    for variant in variants.values() {
        assert_eq!(variant.height(), table.height());
    }
}

#[test]
fn date_form_drops_time_component() {
    let variants = derive_variants(&holiday_table()).unwrap();
    let en = &variants["feriados_en"];
    let encoded = en.encode(DateEncoding::Date).unwrap();
    let column = encoded.column("dt").unwrap();
    assert_eq!(column.dtype(), &DataType::Date);
    // 2024-01-01 is day 19723 of the unix epoch.
    assert_eq!(column.get(0).unwrap(), AnyValue::Date(19_723));
}

#[test]
fn unix_form_holds_epoch_seconds() {
    let variants = derive_variants(&holiday_table()).unwrap();
    let pt_br = &variants["feriados_pt_br"];
    let encoded = pt_br.encode(DateEncoding::Unix).unwrap();
    let column = encoded.column("Data").unwrap();
    assert_eq!(column.dtype(), &DataType::Int64);
    assert_eq!(column.get(0).unwrap(), AnyValue::Int64(1_704_067_200));
    assert_eq!(column.get(2).unwrap(), AnyValue::Int64(1_735_084_800));
}

#[test]
fn encoding_does_not_touch_the_variant() {
    let variants = derive_variants(&holiday_table()).unwrap();
    let en = &variants["feriados_en"];
    let _ = en.encode(DateEncoding::Unix).unwrap();
    assert!(matches!(
        en.data().column("dt").unwrap().dtype(),
        DataType::Datetime(..)
    ));
}

#[test]
fn encoding_requires_a_datetime_column() {
    let table = holiday_table();
    let error = encode_dates(table.data(), "Feriado", DateEncoding::Date).unwrap_err();
    assert!(matches!(error, TransformError::DateColumnType { .. }));
    let error = encode_dates(table.data(), "missing", DateEncoding::Unix).unwrap_err();
    assert!(matches!(error, TransformError::MissingColumn { .. }));
}
