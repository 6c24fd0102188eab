use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use feriados_common::any_to_string;

use crate::error::ExportError;
use crate::writers::FormatWriter;

/// Root element wrapping every record.
pub const ROOT_ELEMENT: &str = "feriados";
/// Element holding one record.
pub const ROW_ELEMENT: &str = "row";

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl FormatWriter for XmlFormat {
    fn extension(&self) -> &str {
        "xml"
    }

    fn write(&self, data: &DataFrame, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
        let mut writer = BufWriter::new(file);
        write_document(&mut writer, data).map_err(|message| ExportError::Xml {
            path: path.to_path_buf(),
            message,
        })?;
        writer.flush().map_err(|source| ExportError::io(path, source))
    }
}

/// Serialize `data` as `<feriados><row><col>value</col>...</row>...</feriados>`.
pub(crate) fn write_document<W: Write>(sink: W, data: &DataFrame) -> Result<(), String> {
    let mut xml = Writer::new_with_indent(sink, b' ', 2);
    let columns = data.get_columns();
    let names: Vec<String> = columns
        .iter()
        .map(|column| xml_element_name(column.name()))
        .collect();

    emit(&mut xml, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    emit(&mut xml, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for row in 0..data.height() {
        emit(&mut xml, Event::Start(BytesStart::new(ROW_ELEMENT)))?;
        for (name, column) in names.iter().zip(columns) {
            let value = column.get(row).map_err(|error| error.to_string())?;
            if matches!(value, AnyValue::Null) {
                emit(&mut xml, Event::Empty(BytesStart::new(name.as_str())))?;
                continue;
            }
            let text = any_to_string(value);
            emit(&mut xml, Event::Start(BytesStart::new(name.as_str())))?;
            emit(&mut xml, Event::Text(BytesText::new(&text)))?;
            emit(&mut xml, Event::End(BytesEnd::new(name.as_str())))?;
        }
        emit(&mut xml, Event::End(BytesEnd::new(ROW_ELEMENT)))?;
    }
    emit(&mut xml, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    Ok(())
}

fn emit<W: Write>(xml: &mut Writer<W>, event: Event<'_>) -> Result<(), String> {
    xml.write_event(event).map_err(|error| error.to_string())
}

/// Element name for a column: characters outside XML names become `_`.
pub fn xml_element_name(column: &str) -> String {
    let mut name: String = column
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let starts_ok = name
        .chars()
        .next()
        .is_some_and(|ch| ch.is_alphabetic() || ch == '_');
    if !starts_ok {
        name.insert(0, '_');
    }
    name
}
