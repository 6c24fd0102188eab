use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::ExportError;
use crate::writers::FormatWriter;

/// `;`-separated UTF-8 with a header row; numbers keep `.` as decimal separator.
#[derive(Debug, Clone, Copy)]
pub struct CsvFormat {
    pub separator: u8,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self { separator: b';' }
    }
}

impl FormatWriter for CsvFormat {
    fn extension(&self) -> &str {
        "csv"
    }

    fn write(&self, data: &DataFrame, path: &Path) -> Result<(), ExportError> {
        let mut file = File::create(path).map_err(|source| ExportError::io(path, source))?;
        let mut frame = data.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(self.separator)
            .finish(&mut frame)
            .map_err(|source| ExportError::polars(path, source))
    }
}
