//! Integration tests for the index page.

use chrono::{TimeZone, Utc};

use feriados_output::{HtmlIndexWriter, IndexEntry, IndexGenerator, list_output_files, render_index};

#[test]
fn renders_listing() {
    let entries = vec![
        IndexEntry {
            name: "feriados_en_date.csv".to_string(),
            path: "data/feriados_en_date.csv".to_string(),
        },
        IndexEntry {
            name: "feriados_en_date_xl.txt".to_string(),
            path: "data/feriados_en_date_xl.txt".to_string(),
        },
    ];
    let generated_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 5).unwrap();
    insta::assert_snapshot!(
        render_index(&entries, generated_at),
        @r#"<!DOCTYPE html><html lang="pt-BR"><head><meta charset="utf-8"><title>Feriados ANBIMA</title></head><body><h1>Feriados ANBIMA</h1><p>Atualizado em 2024-06-01 12:30:05 UTC</p><ul><li><a href="data/feriados_en_date.csv">feriados_en_date.csv</a></li><li><a href="data/feriados_en_date_xl.txt">feriados_en_date_xl.txt</a></li></ul></body></html>"#
    );
}

#[test]
fn writer_lists_output_directory() {
    let temp = tempfile::tempdir().unwrap();
    let data = temp.path().join("data");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(data.join("feriados_en_unix.json"), "[]").unwrap();

    let index_path = temp.path().join("index.html");
    let entries = list_output_files(&data).unwrap();
    HtmlIndexWriter::new(&index_path).generate(&entries).unwrap();

    let html = std::fs::read_to_string(&index_path).unwrap();
    assert!(html.contains(r#"<a href="data/feriados_en_unix.json">feriados_en_unix.json</a>"#));
    assert!(html.contains(" UTC</p>"));
    assert!(html.starts_with("<!DOCTYPE html>"));
}
