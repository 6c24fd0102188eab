//! Holiday table output generation.
//!
//! This crate writes export-ready frames in every configured format:
//!
//! - **CSV**: `;`-separated, UTF-8, header row
//! - **JSON**: array of records, ISO-8601 dates, 4-space indentation
//! - **XML**: `<feriados>` root with one `<row>` per record
//! - **Parquet**: columnar binary
//!
//! plus the Excel serial-date sidecar for date-encoded frames and the HTML
//! listing page of the output directory.

pub mod error;
pub mod exporter;
pub mod index;
pub mod registry;
pub mod sidecar;
pub mod writers;

pub use error::ExportError;
pub use exporter::{ExportFailure, ExportReport, Exporter};
pub use index::{HtmlIndexWriter, IndexEntry, IndexGenerator, list_output_files, render_index};
pub use registry::WriterRegistry;
pub use sidecar::{excel_serials, write_excel_sidecar};
pub use writers::{CsvFormat, FormatWriter, JsonFormat, ParquetFormat, XmlFormat};
