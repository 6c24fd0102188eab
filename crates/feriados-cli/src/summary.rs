use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use feriados_cli::pipeline::RunOutcome;
use feriados_model::Settings;

/// Artifact table followed by the run year on its own line.
pub fn print_summary(settings: &Settings, outcome: &RunOutcome) {
    println!("Output: {}", settings.output_dir.display());
    println!("Index: {}", settings.index_path.display());
    println!("Rows: {}", outcome.rows);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Export"),
        header_cell("Format"),
        header_cell("File"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Center);
    }

    for report in &outcome.reports {
        for path in &report.written {
            let format = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| if ext == "txt" { "sidecar" } else { ext })
                .unwrap_or("-");
            table.add_row(vec![
                Cell::new(&report.base_name),
                Cell::new(format),
                Cell::new(file_name(path)),
                Cell::new("✓")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
        }
        for failure in &report.failures {
            table.add_row(vec![
                Cell::new(&report.base_name),
                Cell::new(&failure.format),
                Cell::new(file_name(&failure.path)),
                Cell::new(failure.error.to_string()).fg(Color::Red),
            ]);
        }
        for format in &report.skipped {
            table.add_row(vec![
                Cell::new(&report.base_name),
                Cell::new(format),
                dim_cell("-"),
                dim_cell("skipped"),
            ]);
        }
    }
    println!("{table}");

    let failures = outcome.failure_count();
    if failures > 0 {
        println!("{failures} export(s) failed; see log for details");
    }
    println!("{}", outcome.year);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
