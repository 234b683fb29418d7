//! Bookstore catalog CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use bookstore_cli::commands::{
    Exclusion, ListView, StatsQuery, run_decade, run_demo, run_list, run_novels, run_search,
    run_sorted, run_stats,
};
use bookstore_cli::logging::{LogConfig, LogFormat, init_logging};
use bookstore_cli::sample::sample_catalog;
use bookstore_cli::summary::OutputStyle;
use bookstore_core::{CatalogOptions, IndexRefresh};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use tracing::{error, info_span};

mod cli;

use crate::cli::{Cli, Command, IndexRefreshArg, ListViewArg, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let options = CatalogOptions::default().with_index_refresh(match cli.index_refresh {
        IndexRefreshArg::Manual => IndexRefresh::Manual,
        IndexRefreshArg::OnAdd => IndexRefresh::OnAdd,
    });
    let mut catalog = sample_catalog(&cli.store_name, options)?;
    let style = output_style(cli);
    let command_span = info_span!("command", store = %cli.store_name);
    let _command_guard = command_span.enter();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Demo => run_demo(&mut catalog, &mut out),
        Command::List(args) => {
            let view = match args.view {
                ListViewArg::Table => ListView::Table,
                ListViewArg::Lines => ListView::Lines,
                ListViewArg::Uppercase => ListView::Uppercase,
                ListViewArg::Alphabetical => ListView::Alphabetical,
            };
            run_list(&catalog, view, args.kind, style, &mut out)
        }
        Command::Search(args) => run_search(&catalog, &args.word, style, &mut out),
        Command::Decade(args) => run_decade(&catalog, args.year, &mut out),
        Command::Sorted(args) => {
            let exclusion = match (&args.exclude, args.prune_items) {
                (Some(needle), true) => Exclusion::Items(needle),
                (Some(needle), false) => Exclusion::IndexOnly(needle),
                (None, _) => Exclusion::None,
            };
            run_sorted(&mut catalog, exclusion, &mut out)
        }
        Command::Stats(args) => {
            let query = StatsQuery {
                from: args.from,
                to: args.to,
                year: args.year,
                title_length: args.title_length,
            };
            run_stats(&catalog, query, style, &mut out)
        }
        Command::Novels => run_novels(&catalog, style, &mut out),
    }
}

/// Table styling for the `--color` choice and stdout.
fn output_style(cli: &Cli) -> OutputStyle {
    OutputStyle {
        color: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        },
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
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
