//! Where the pipeline's raw table comes from.

use feriados_model::{RawTable, Settings};

use crate::error::IngestError;
use crate::fetch::HttpFetcher;
use crate::spreadsheet::decode_workbook;

/// Producer of the untyped holiday table.
pub trait TableSource {
    /// Origin shown in logs (URL, file name, ...).
    fn describe(&self) -> String;

    fn load(&self) -> Result<RawTable, IngestError>;
}

/// Downloads the workbook and strips its footnote rows.
#[derive(Debug, Clone)]
pub struct HttpSpreadsheetSource {
    url: String,
    trailer_rows: usize,
    fetcher: HttpFetcher,
}

impl HttpSpreadsheetSource {
    pub fn new(url: impl Into<String>, trailer_rows: usize, fetcher: HttpFetcher) -> Self {
        Self {
            url: url.into(),
            trailer_rows,
            fetcher,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, IngestError> {
        let fetcher = HttpFetcher::new(settings.fetch_timeout(), settings.accept_invalid_certs)?;
        Ok(Self::new(
            settings.url_anbima_feriados.clone(),
            settings.trailer_rows,
            fetcher,
        ))
    }
}

impl TableSource for HttpSpreadsheetSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn load(&self) -> Result<RawTable, IngestError> {
        let bytes = self.fetcher.fetch(&self.url)?;
        decode_workbook(bytes, self.trailer_rows)
    }
}

/// A table already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticTableSource {
    table: RawTable,
}

impl StaticTableSource {
    pub fn new(table: RawTable) -> Self {
        Self { table }
    }
}

impl TableSource for StaticTableSource {
    fn describe(&self) -> String {
        "in-memory table".to_string()
    }

    fn load(&self) -> Result<RawTable, IngestError> {
        Ok(self.table.clone())
    }
}
