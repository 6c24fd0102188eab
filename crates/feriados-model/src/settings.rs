//! Run settings loaded from `config.toml`.
//!
//! Keys are lower-case; the upper-case spelling of the original deployment
//! (`OUTPUT_DIR`, `EXPORT_FORMATS`, ...) is accepted as an alias.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory receiving every export artifact.
    #[serde(default = "default_output_dir", alias = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    #[serde(default = "default_log_dir", alias = "LOG_DIR")]
    pub log_dir: PathBuf,

    /// Location of the published holiday spreadsheet.
    #[serde(alias = "URL_ANBIMA_FERIADOS")]
    pub url_anbima_feriados: String,

    /// Ordered format identifiers; unknown identifiers are ignored at export time.
    #[serde(alias = "EXPORT_FORMATS")]
    pub export_formats: Vec<String>,

    /// Listing page written after every run.
    #[serde(default = "default_index_path", alias = "INDEX_PATH")]
    pub index_path: PathBuf,

    #[serde(default = "default_fetch_timeout_secs", alias = "FETCH_TIMEOUT_SECS")]
    pub fetch_timeout_secs: u64,

    /// Footnote rows the publisher appends below the table.
    #[serde(default = "default_trailer_rows", alias = "TRAILER_ROWS")]
    pub trailer_rows: usize,

    /// Skip TLS certificate verification when fetching the source.
    #[serde(default, alias = "ACCEPT_INVALID_CERTS")]
    pub accept_invalid_certs: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_index_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_trailer_rows() -> usize {
    10
}

impl Settings {
    /// Read and validate settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Parse settings from TOML text; `origin` is only used in error messages.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.url_anbima_feriados.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "url_anbima_feriados must not be empty".to_string(),
            });
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "fetch_timeout_secs must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Create the output and log directories if they do not exist.
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        for dir in [&self.output_dir, &self.log_dir] {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    #[must_use]
    pub fn with_export_formats(mut self, formats: Vec<String>) -> Self {
        self.export_formats = formats;
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
url_anbima_feriados = "https://example.test/feriados.xls"
export_formats = ["csv", "json"]
"#;

    #[test]
    fn applies_defaults() {
        let settings = Settings::from_toml_str(MINIMAL, Path::new("config.toml")).unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("data"));
        assert_eq!(settings.log_dir, PathBuf::from("logs"));
        assert_eq!(settings.index_path, PathBuf::from("index.html"));
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(settings.trailer_rows, 10);
        assert!(!settings.accept_invalid_certs);
        assert_eq!(settings.export_formats, vec!["csv", "json"]);
    }

    #[test]
    fn accepts_upper_case_keys() {
        let contents = r#"
OUTPUT_DIR = "out"
LOG_DIR = "log"
URL_ANBIMA_FERIADOS = "https://example.test/feriados.xls"
EXPORT_FORMATS = ["xml", "parquet", "xlsx"]
"#;
        let settings = Settings::from_toml_str(contents, Path::new("config.toml")).unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.log_dir, PathBuf::from("log"));
        assert_eq!(settings.export_formats, vec!["xml", "parquet", "xlsx"]);
    }

    #[test]
    fn rejects_missing_url() {
        let error = Settings::from_toml_str("export_formats = []", Path::new("c.toml"))
            .expect_err("missing url");
        assert!(matches!(error, ConfigError::Toml { .. }));
    }

    #[test]
    fn rejects_blank_url() {
        let contents = "url_anbima_feriados = \" \"\nexport_formats = []\n";
        let error = Settings::from_toml_str(contents, Path::new("c.toml")).expect_err("blank url");
        assert!(matches!(error, ConfigError::Invalid { .. }));
    }

    #[test]
    fn ensure_dirs_creates_both() {
        let temp = tempfile::tempdir().unwrap();
        let settings = Settings::from_toml_str(MINIMAL, Path::new("config.toml"))
            .unwrap()
            .with_output_dir(temp.path().join("data"));
        let settings = Settings {
            log_dir: temp.path().join("logs"),
            ..settings
        };
        settings.ensure_dirs().unwrap();
        assert!(temp.path().join("data").is_dir());
        assert!(temp.path().join("logs").is_dir());
    }

    #[test]
    fn load_reports_missing_file() {
        let error = Settings::load(Path::new("/nonexistent/config.toml")).expect_err("missing");
        assert!(matches!(error, ConfigError::Io { .. }));
    }
}
