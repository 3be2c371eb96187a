//! CLI argument definitions for the batch inventory tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stocklot",
    version,
    about = "Batch inventory import and reporting",
    long_about = "Parse tab-delimited batch inventory exports and report on them.\n\n\
                  Supports stock totals, low/critical stock and expiry views,\n\
                  category and vendor summaries, and JSON export of the\n\
                  normalized records."
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
    /// Print batch totals plus category and vendor summaries.
    Stats(FileArgs),

    /// List items with stock at or below a threshold.
    LowStock(LowStockArgs),

    /// List items at or below their configured reorder level.
    Critical(FileArgs),

    /// List batches expiring within the coming months.
    Expiring(ExpiringArgs),

    /// Summarize stock value per category.
    Categories(FileArgs),

    /// Summarize stock value per vendor.
    Vendors(FileArgs),

    /// Write the normalized records as JSON.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct FileArgs {
    /// Path to the tab-delimited import file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct LowStockArgs {
    #[command(flatten)]
    pub file: FileArgs,

    /// Quantity threshold for the low-stock view.
    #[arg(long = "threshold", value_name = "QTY", default_value_t = 10.0)]
    pub threshold: f64,
}

#[derive(Args)]
pub struct ExpiringArgs {
    #[command(flatten)]
    pub file: FileArgs,

    /// How many months ahead to look for expiring batches.
    #[arg(long = "months", value_name = "N", default_value_t = 3)]
    pub months: u32,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub file: FileArgs,

    /// Output path; stdout when omitted.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn parses_stats_subcommand() {
        let cli = Cli::try_parse_from(["stocklot", "stats", "inventory.tsv"]).expect("parse");
        match cli.command {
            Command::Stats(args) => assert_eq!(args.file.to_str(), Some("inventory.tsv")),
            _ => panic!("expected stats subcommand"),
        }
    }

    #[test]
    fn low_stock_threshold_defaults_to_ten() {
        let cli = Cli::try_parse_from(["stocklot", "low-stock", "inventory.tsv"]).expect("parse");
        match cli.command {
            Command::LowStock(args) => assert_eq!(args.threshold, 10.0),
            _ => panic!("expected low-stock subcommand"),
        }
    }

    #[test]
    fn expiring_months_can_be_overridden() {
        let cli =
            Cli::try_parse_from(["stocklot", "expiring", "inventory.tsv", "--months", "6"])
                .expect("parse");
        match cli.command {
            Command::Expiring(args) => assert_eq!(args.months, 6),
            _ => panic!("expected expiring subcommand"),
        }
    }

    #[test]
    fn export_accepts_out_and_pretty() {
        let cli = Cli::try_parse_from([
            "stocklot",
            "export",
            "inventory.tsv",
            "--out",
            "records.json",
            "--pretty",
        ])
        .expect("parse");
        match cli.command {
            Command::Export(args) => {
                assert_eq!(args.out.as_deref().and_then(|p| p.to_str()), Some("records.json"));
                assert!(args.pretty);
            }
            _ => panic!("expected export subcommand"),
        }
    }

    #[test]
    fn missing_file_argument_is_an_error() {
        assert!(Cli::try_parse_from(["stocklot", "stats"]).is_err());
    }
}
