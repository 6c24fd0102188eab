//! Built-in export formats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    Xml,
    Parquet,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Xml,
        OutputFormat::Parquet,
    ];

    /// Identifier used in configuration (`export_formats`).
    pub fn id(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
            OutputFormat::Parquet => "parquet",
        }
    }

    pub fn extension(self) -> &'static str {
        self.id()
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Csv => "Semicolon-separated values, UTF-8, header row",
            OutputFormat::Json => "Array of records, ISO-8601 dates, 4-space indent",
            OutputFormat::Xml => "<feriados> root with one <row> element per record",
            OutputFormat::Parquet => "Columnar binary (Apache Parquet)",
        }
    }

    /// Parse a configuration identifier; unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.id().eq_ignore_ascii_case(id.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_ids() {
        assert_eq!(OutputFormat::from_id("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_id(" Parquet "), Some(OutputFormat::Parquet));
        assert_eq!(OutputFormat::from_id("xlsx"), None);
    }
}
