use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Serializer, Value};

use feriados_common::{any_to_datetime, any_to_string};

use crate::error::ExportError;
use crate::writers::FormatWriter;

const INDENT: &[u8] = b"    ";

/// Array of records in column order, dates as ISO-8601 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl FormatWriter for JsonFormat {
    fn extension(&self) -> &str {
        "json"
    }

    fn write(&self, data: &DataFrame, path: &Path) -> Result<(), ExportError> {
        let records = records(data).map_err(|source| ExportError::polars(path, source))?;
        let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
        let mut serializer =
            Serializer::with_formatter(BufWriter::new(file), PrettyFormatter::with_indent(INDENT));
        records
            .serialize(&mut serializer)
            .map_err(|source| ExportError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        serializer
            .into_inner()
            .flush()
            .map_err(|source| ExportError::io(path, source))
    }
}

fn records(data: &DataFrame) -> polars::prelude::PolarsResult<Value> {
    let columns = data.get_columns();
    let mut rows = Vec::with_capacity(data.height());
    for row in 0..data.height() {
        let mut record = Map::with_capacity(columns.len());
        for column in columns {
            record.insert(column.name().to_string(), json_value(column.get(row)?));
        }
        rows.push(Value::Object(record));
    }
    Ok(Value::Array(rows))
}

fn json_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::Int8(v) => Value::from(v),
        AnyValue::Int16(v) => Value::from(v),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt8(v) => Value::from(v),
        AnyValue::UInt16(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => Number::from_f64(f64::from(v)).map_or(Value::Null, Value::Number),
        AnyValue::Float64(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
        AnyValue::Date(days) => Value::String(any_to_string(AnyValue::Date(days))),
        AnyValue::Datetime(raw, unit, tz) => any_to_datetime(AnyValue::Datetime(raw, unit, tz))
            .map_or(Value::Null, |datetime| {
                Value::String(datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
            }),
        other => Value::String(any_to_string(other)),
    }
}
