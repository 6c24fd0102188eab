//! Holiday spreadsheet ingestion.
//!
//! Fetches the published workbook over HTTP and decodes its first worksheet
//! into an untyped [`RawTable`](feriados_model::RawTable), dropping the
//! publisher's footnote rows.

pub mod error;
pub mod fetch;
pub mod source;
pub mod spreadsheet;

pub use error::IngestError;
pub use fetch::HttpFetcher;
pub use source::{HttpSpreadsheetSource, StaticTableSource, TableSource};
pub use spreadsheet::{decode_workbook, table_from_rows};
