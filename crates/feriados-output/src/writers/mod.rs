//! Per-format serialization of a frame.

use std::path::Path;

use polars::prelude::DataFrame;

use crate::error::ExportError;

mod csv;
mod json;
mod parquet;
mod xml;

pub use self::csv::CsvFormat;
pub use self::json::JsonFormat;
pub use self::parquet::ParquetFormat;
pub use self::xml::{ROOT_ELEMENT, ROW_ELEMENT, XmlFormat, xml_element_name};

/// Serializes a whole frame to one file.
pub trait FormatWriter {
    /// File extension without the dot.
    fn extension(&self) -> &str;

    /// Write `data` to `path`, replacing any existing file.
    fn write(&self, data: &DataFrame, path: &Path) -> Result<(), ExportError>;
}
