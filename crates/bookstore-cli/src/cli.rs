//! CLI argument definitions for the bookstore catalog.

use std::path::PathBuf;

use bookstore_model::ItemKind;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bookstore",
    version,
    about = "Query an in-memory catalog of novels, comic books and magazines",
    long_about = "Query an in-memory catalog of novels, comic books and magazines.\n\n\
                  The catalog is built from the bundled sample data on every run."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Display name of the store.
    #[arg(
        long = "store-name",
        default_value = "The Greatest Bookstore",
        global = true
    )]
    pub store_name: String,

    /// When the title index picks up newly added items.
    #[arg(
        long = "index-refresh",
        value_enum,
        default_value = "manual",
        global = true
    )]
    pub index_refresh: IndexRefreshArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every report against the sample store.
    Demo,

    /// List the items in the store.
    List(ListArgs),

    /// Find items whose title contains a word (case-insensitive).
    Search(SearchArgs),

    /// List titles published in the decade containing a year.
    Decade(DecadeArgs),

    /// Print items in title-index order, optionally excluding titles.
    Sorted(SortedArgs),

    /// Show catalog statistics.
    Stats(StatsArgs),

    /// List only the novels.
    Novels,
}

#[derive(Parser)]
pub struct ListArgs {
    /// How to present the items.
    #[arg(long = "view", value_enum, default_value = "table")]
    pub view: ListViewArg,

    /// Only list items of this kind (novel, comic, magazine).
    #[arg(long = "kind", value_name = "KIND")]
    pub kind: Option<ItemKind>,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Word to look for in titles.
    #[arg(value_name = "WORD")]
    pub word: String,
}

#[derive(Parser)]
pub struct DecadeArgs {
    /// Any year in the decade; it is anchored to the preceding multiple of ten.
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub year: i32,
}

#[derive(Parser)]
pub struct SortedArgs {
    /// Drop index entries whose title contains this text before printing.
    #[arg(long = "exclude", value_name = "TEXT")]
    pub exclude: Option<String>,

    /// Remove matching items from the catalog as well as the index.
    #[arg(long = "prune-items", requires = "exclude")]
    pub prune_items: bool,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// First year of the range used for the percentage figure.
    #[arg(long = "from", default_value_t = 1800, allow_negative_numbers = true)]
    pub from: i32,

    /// Last year (inclusive) of the range used for the percentage figure.
    #[arg(long = "to", default_value_t = 1900, allow_negative_numbers = true)]
    pub to: i32,

    /// Report whether anything was published in this year.
    #[arg(long = "year", allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// List items whose title has exactly this many characters.
    #[arg(long = "title-length")]
    pub title_length: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListViewArg {
    Table,
    Lines,
    Uppercase,
    Alphabetical,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IndexRefreshArg {
    Manual,
    OnAdd,
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
