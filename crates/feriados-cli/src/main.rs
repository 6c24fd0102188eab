//! ANBIMA holiday calendar exporter.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use feriados_cli::logging::{LogConfig, LogFormat, init_logging, log_file_in};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_settings, run, run_formats};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let exit_code = match &cli.command {
        Command::Run(args) => {
            let settings = match load_settings(args) {
                Ok(settings) => settings,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    std::process::exit(1);
                }
            };
            let log_file = cli
                .log_file
                .clone()
                .unwrap_or_else(|| log_file_in(&settings.log_dir));
            start_logging(&cli, Some(log_file));
            match run(&settings) {
                Ok(outcome) => {
                    print_summary(&settings, &outcome);
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Formats => {
            start_logging(&cli, cli.log_file.clone());
            run_formats();
            0
        }
    };
    std::process::exit(exit_code);
}

fn start_logging(cli: &Cli, log_file: Option<std::path::PathBuf>) {
    let log_config = log_config_from_cli(cli).with_log_file(log_file);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
