//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use feriados_model::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "feriados",
    version,
    about = "ANBIMA holiday calendar exporter",
    long_about = "Download the ANBIMA national holiday spreadsheet, validate it and export\n\
                  Portuguese and English variants as CSV, JSON, XML and Parquet,\n\
                  with dates as calendar dates or Unix seconds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Log file path (default: <log_dir>/data_update.log from the config).
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch, validate and export the holiday calendar, then print the year.
    Run(RunArgs),

    /// List the recognized export formats.
    Formats,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Settings file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides `output_dir`).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Export format, repeatable (overrides `export_formats`).
    #[arg(long = "format", value_name = "FORMAT")]
    pub formats: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
