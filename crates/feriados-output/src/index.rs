//! HTML listing page of the output directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, html};
use tracing::info;

use crate::error::ExportError;

/// Timestamp layout shown on the listing page.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

const PAGE_TITLE: &str = "Feriados ANBIMA";

/// One listed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// File name inside the output directory.
    pub name: String,
    /// Link target relative to the project root: `<output dir name>/<name>`.
    pub path: String,
}

/// Consumer of the directory listing produced after an export run.
pub trait IndexGenerator {
    fn generate(&self, entries: &[IndexEntry]) -> Result<(), ExportError>;
}

/// List regular files of `output_dir`, sorted by name.
pub fn list_output_files(output_dir: &Path) -> Result<Vec<IndexEntry>, ExportError> {
    let list_error = |source| ExportError::ListDir {
        path: output_dir.to_path_buf(),
        source,
    };
    let prefix = output_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut names = Vec::new();
    for entry in std::fs::read_dir(output_dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        if !entry.file_type().map_err(list_error)?.is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}/{name}")
            };
            IndexEntry { name, path }
        })
        .collect())
}

/// Render the listing page. Interpolated names, links and the timestamp are
/// escaped by `maud`.
pub fn render_index(entries: &[IndexEntry], generated_at: DateTime<Utc>) -> String {
    let stamp = generated_at.format(GENERATED_AT_FORMAT).to_string();
    let page: Markup = html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { (PAGE_TITLE) }
            }
            body {
                h1 { (PAGE_TITLE) }
                p { "Atualizado em " (stamp) }
                ul {
                    @for entry in entries {
                        li { a href=(entry.path) { (entry.name) } }
                    }
                }
            }
        }
    };
    page.into_string()
}

/// Writes the listing page to a fixed path, stamped with the current time.
#[derive(Debug, Clone)]
pub struct HtmlIndexWriter {
    path: PathBuf,
}

impl HtmlIndexWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IndexGenerator for HtmlIndexWriter {
    fn generate(&self, entries: &[IndexEntry]) -> Result<(), ExportError> {
        let html = render_index(entries, Utc::now());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::io(parent, source))?;
        }
        std::fs::write(&self.path, html).map_err(|source| ExportError::io(&self.path, source))?;
        info!(path = %self.path.display(), entries = entries.len(), "index page written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_files_only_in_name_order() {
        let temp = tempfile::tempdir().unwrap();
        let data = temp.path().join("data");
        std::fs::create_dir(&data).unwrap();
        std::fs::write(data.join("feriados_pt_br_date.csv"), "").unwrap();
        std::fs::write(data.join("feriados_en_date.csv"), "").unwrap();
        std::fs::create_dir(data.join("archive")).unwrap();

        let entries = list_output_files(&data).unwrap();
        assert_eq!(
            entries,
            vec![
                IndexEntry {
                    name: "feriados_en_date.csv".to_string(),
                    path: "data/feriados_en_date.csv".to_string(),
                },
                IndexEntry {
                    name: "feriados_pt_br_date.csv".to_string(),
                    path: "data/feriados_pt_br_date.csv".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let error = list_output_files(Path::new("/nonexistent/data")).unwrap_err();
        assert!(matches!(error, ExportError::ListDir { .. }));
    }

    #[test]
    fn names_are_escaped() {
        let entries = vec![IndexEntry {
            name: "a<b>&c.csv".to_string(),
            path: "data/a<b>&c.csv".to_string(),
        }];
        let html = render_index(&entries, Utc::now());
        assert!(html.contains("<a href=\"data/a&lt;b&gt;&amp;c.csv\">a&lt;b&gt;&amp;c.csv</a>"));
    }
}
