use std::fs::File;
use std::path::Path;

use polars::prelude::{DataFrame, ParquetWriter};

use crate::error::ExportError;
use crate::writers::FormatWriter;

#[derive(Debug, Clone, Copy, Default)]
pub struct ParquetFormat;

impl FormatWriter for ParquetFormat {
    fn extension(&self) -> &str {
        "parquet"
    }

    fn write(&self, data: &DataFrame, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
        let mut frame = data.clone();
        ParquetWriter::new(file)
            .finish(&mut frame)
            .map_err(|source| ExportError::polars(path, source))?;
        Ok(())
    }
}
