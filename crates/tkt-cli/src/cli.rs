//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use tkt_core::DEFAULT_TOP_N;

#[derive(Parser)]
#[command(
    name = "tkt",
    version,
    about = "Reconcile ticket barcodes with orders and summarize customers",
    long_about = "Validate an orders table and a barcodes table, attach barcodes to orders,\n\
                  group orders by customer and write one row per order with its barcodes.\n\
                  Invalid, duplicate and orphaned records are logged and skipped."
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// CSV file with `order_id` and `customer_id` columns.
    #[arg(value_name = "ORDERS")]
    pub orders: PathBuf,

    /// CSV file with `barcode` and `order_id` columns.
    #[arg(value_name = "BARCODES")]
    pub barcodes: PathBuf,

    /// Destination CSV for `customer_id,order_id,barcodes` rows.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of customers to list in the ticket ranking.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Number of customers to show in the order sample.
    #[arg(long = "sample-customers", value_name = "N", default_value_t = 5)]
    pub sample_customers: usize,

    /// Fail instead of reporting zero when duplicates outnumber unused barcodes.
    #[arg(long = "strict-unused")]
    pub strict_unused: bool,

    /// Process and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write every rejected record and the run summary as JSON.
    #[arg(long = "diagnostics-json", value_name = "PATH")]
    pub diagnostics_json: Option<PathBuf>,
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
