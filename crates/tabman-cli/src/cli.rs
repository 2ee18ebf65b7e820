//! CLI argument definitions for tabman.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabman",
    version,
    about = "tabman - search, sort, edit and export tabular records",
    long_about = "Manage a table of person records from the terminal.\n\n\
                  Imports and exports CSV, validates rows, and keeps column\n\
                  and theme preferences between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

    /// Allow record values (names, emails) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: ./tabman.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Preferences file (overrides `preferences_path` from settings).
    #[arg(long = "prefs", value_name = "PATH", global = true)]
    pub prefs: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV file and print one page of the table.
    View(ViewArgs),

    /// Write the filtered, sorted table with visible columns to CSV.
    Export(ExportArgs),

    /// Validate a CSV file without importing it.
    Check(CheckArgs),

    /// Replay a JSON script of table actions.
    Run(RunArgs),

    /// List or change the persisted column definitions.
    #[command(subcommand)]
    Columns(ColumnsCommand),

    /// Show or toggle the persisted theme.
    #[command(subcommand)]
    Theme(ThemeCommand),
}

/// Where the records come from and how the view is derived.
#[derive(Args, Clone, Default)]
pub struct ViewOptions {
    /// Case-insensitive search across every field.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Field or column id to sort by.
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long = "desc", requires = "sort")]
    pub desc: bool,
}

#[derive(Args)]
pub struct ViewArgs {
    /// CSV file to import.
    #[arg(value_name = "CSV", required_unless_present = "sample")]
    pub csv: Option<PathBuf>,

    /// Use the built-in sample records instead of a file.
    #[arg(long = "sample", conflicts_with = "csv")]
    pub sample: bool,

    #[command(flatten)]
    pub view: ViewOptions,

    /// Zero-based page to print.
    #[arg(long = "page", default_value_t = 0)]
    pub page: usize,

    /// Rows per page (default from settings).
    #[arg(long = "rows-per-page", value_name = "N")]
    pub rows_per_page: Option<usize>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// CSV file to import.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    #[command(flatten)]
    pub view: ViewOptions,

    /// Output file (default: `export_file_name` from settings).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// CSV file to validate.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Args)]
pub struct RunArgs {
    /// JSON array of actions, e.g. `[{"action": "search", "query": "dev"}]`.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// CSV file to import before the script runs (default: sample records).
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Save column and theme changes made by the script.
    #[arg(long = "save-prefs")]
    pub save_prefs: bool,
}

#[derive(Subcommand)]
pub enum ColumnsCommand {
    /// Print every column definition.
    List,

    /// Add a column; the id is the label lowercased without whitespace.
    Add {
        #[arg(value_name = "LABEL")]
        label: String,

        #[arg(long = "type", value_enum, default_value = "string")]
        column_type: ColumnTypeArg,
    },

    /// Show or hide an optional column.
    Toggle {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    Show,
    Toggle,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColumnTypeArg {
    String,
    Number,
    Email,
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
