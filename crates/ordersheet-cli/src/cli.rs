//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ordersheet",
    version,
    about = "Order sheet ingestion - normalize vendor CSV/Excel files into line items",
    long_about = "Normalize vendor order sheets into structured line items.\n\n\
                  Accepts CSV, TSV, and Excel (.xlsx, .xls) files with arbitrary\n\
                  column names and header positions; maps columns to canonical\n\
                  fields and resolves quantities, costs, and retail prices."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest an order sheet and print the normalized line items.
    Ingest(IngestArgs),

    /// List the canonical fields and the header aliases mapped to each.
    Fields,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Path to the order sheet (.csv, .txt, .xlsx, .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit the full result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Mint sequential line-item ids (li-000001, ...) for diffable output.
    #[arg(long = "stable-ids")]
    pub stable_ids: bool,

    /// Write the JSON result to a file in addition to printing.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
