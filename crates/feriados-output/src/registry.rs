//! Format identifier to writer lookup.

use std::collections::BTreeMap;

use feriados_model::OutputFormat;

use crate::writers::{CsvFormat, FormatWriter, JsonFormat, ParquetFormat, XmlFormat};

/// Writers keyed by configuration identifier (`csv`, `json`, ...).
pub struct WriterRegistry {
    writers: BTreeMap<String, Box<dyn FormatWriter>>,
}

impl WriterRegistry {
    /// Registry with no writers.
    pub fn empty() -> Self {
        Self {
            writers: BTreeMap::new(),
        }
    }

    /// Registry with the built-in CSV, JSON, XML and Parquet writers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for format in OutputFormat::ALL {
            let writer: Box<dyn FormatWriter> = match format {
                OutputFormat::Csv => Box::new(CsvFormat::default()),
                OutputFormat::Json => Box::new(JsonFormat),
                OutputFormat::Xml => Box::new(XmlFormat),
                OutputFormat::Parquet => Box::new(ParquetFormat),
            };
            registry.writers.insert(format.id().to_string(), writer);
        }
        registry
    }

    /// Add or replace the writer for `id`.
    pub fn register(&mut self, id: impl Into<String>, writer: Box<dyn FormatWriter>) {
        self.writers.insert(normalize_id(&id.into()), writer);
    }

    /// Writer for a configuration identifier, matched case-insensitively.
    pub fn get(&self, id: &str) -> Option<&dyn FormatWriter> {
        self.writers.get(&normalize_id(id)).map(Box::as_ref)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.writers.keys().map(String::as_str)
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for WriterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.writers.keys()).finish()
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_builtin_formats() {
        let registry = WriterRegistry::with_defaults();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["csv", "json", "parquet", "xml"]);
        assert_eq!(registry.get("CSV").map(|w| w.extension()), Some("csv"));
        assert!(registry.get("xlsx").is_none());
    }

    #[test]
    fn register_replaces_existing_writer() {
        let mut registry = WriterRegistry::with_defaults();
        registry.register("json", Box::new(CsvFormat::default()));
        assert_eq!(registry.get("json").map(|w| w.extension()), Some("csv"));
    }
}
