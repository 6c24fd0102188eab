use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use feriados_cli::pipeline::{Pipeline, RunOutcome};
use feriados_model::{OutputFormat, Settings};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_formats() {
    let mut table = Table::new();
    table.set_header(vec!["Format", "Extension", "Description"]);
    apply_table_style(&mut table);
    for format in OutputFormat::ALL {
        table.add_row(vec![
            format.id().to_string(),
            format!(".{}", format.extension()),
            format.description().to_string(),
        ]);
    }
    println!("{table}");
}

/// Load settings, apply CLI overrides and create the output/log directories.
pub fn load_settings(args: &RunArgs) -> Result<Settings> {
    let mut settings = Settings::load(&args.config)
        .with_context(|| format!("load settings from {}", args.config.display()))?;
    if let Some(output_dir) = &args.output_dir {
        settings = settings.with_output_dir(output_dir.clone());
    }
    if !args.formats.is_empty() {
        settings = settings.with_export_formats(args.formats.clone());
    }
    settings.ensure_dirs().context("create output directories")?;
    Ok(settings)
}

pub fn run(settings: &Settings) -> Result<RunOutcome> {
    let span = info_span!("run", output_dir = %settings.output_dir.display());
    let _guard = span.enter();
    let mut pipeline = Pipeline::from_settings(settings).context("configure pipeline")?;
    let outcome = pipeline.run()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_replace_config_values() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(
            &config,
            format!(
                "url_anbima_feriados = \"https://example.test/feriados.xls\"\n\
                 export_formats = [\"csv\", \"json\"]\n\
                 log_dir = \"{}\"\n",
                temp.path().join("logs").display()
            ),
        )
        .unwrap();
        let args = RunArgs {
            config,
            output_dir: Some(temp.path().join("out")),
            formats: vec!["xml".to_string()],
        };

        let settings = load_settings(&args).unwrap();

        assert_eq!(settings.output_dir, temp.path().join("out"));
        assert_eq!(settings.export_formats, vec!["xml"]);
        assert!(temp.path().join("out").is_dir());
        assert!(temp.path().join("logs").is_dir());
    }

    #[test]
    fn missing_config_is_reported() {
        let args = RunArgs {
            config: "/nonexistent/config.toml".into(),
            output_dir: None,
            formats: Vec::new(),
        };
        let error = load_settings(&args).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/config.toml"));
    }
}
