//! CLI argument definitions for the listing cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use listing_model::{FractionPolicy, MissingMileage};

#[derive(Parser)]
#[command(
    name = "listing-clean",
    version,
    about = "Normalize scraped vehicle listings into a canonical table",
    long_about = "Normalize scraped vehicle listings into a canonical table.\n\n\
                  Locates the price, mileage and year columns by name, parses their\n\
                  free-text cells into integers, and drops implausible rows."
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
    /// Normalize a listing table and write the canonical CSV.
    Clean(CleanArgs),

    /// Show the synonyms used to locate each column role.
    Roles(RolesArgs),

    /// Flatten saved phone spec and price JSON documents into a CSV table.
    Offers(OffersArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw listing CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV (default: <INPUT stem>_cleaned.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON file of extra role synonyms, e.g. {"year": ["year", "annee", "ano"]}.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,

    /// Exclusive lower price bound (default: 5000).
    #[arg(long = "price-floor", value_name = "N")]
    pub price_floor: Option<i64>,

    /// Exclusive upper price bound (default: 3000000).
    #[arg(long = "price-ceiling", value_name = "N")]
    pub price_ceiling: Option<i64>,

    /// Value stored for mileage cells with no digits.
    #[arg(long = "missing-mileage", value_enum, default_value = "zero")]
    pub missing_mileage: MissingMileageArg,

    /// Treatment of prices with a non-zero dot fraction ("80000.50").
    #[arg(long = "fraction-policy", value_enum, default_value = "reject")]
    pub fraction_policy: FractionPolicyArg,

    /// Normalize and report without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RolesArgs {
    /// JSON file of extra role synonyms.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,
}

#[derive(Parser)]
pub struct OffersArgs {
    /// Saved specs document.
    #[arg(long = "specs", value_name = "PATH")]
    pub specs: PathBuf,

    /// Saved prices document.
    #[arg(long = "prices", value_name = "PATH")]
    pub prices: PathBuf,

    /// Output CSV.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MissingMileageArg {
    /// Store 0.
    Zero,
    /// Store an empty cell.
    Null,
}

impl From<MissingMileageArg> for MissingMileage {
    fn from(arg: MissingMileageArg) -> Self {
        match arg {
            MissingMileageArg::Zero => MissingMileage::Zero,
            MissingMileageArg::Null => MissingMileage::Null,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FractionPolicyArg {
    /// Treat the price as unparseable and drop the row.
    Reject,
    /// Keep the integer part.
    Truncate,
}

impl From<FractionPolicyArg> for FractionPolicy {
    fn from(arg: FractionPolicyArg) -> Self {
        match arg {
            FractionPolicyArg::Reject => FractionPolicy::Reject,
            FractionPolicyArg::Truncate => FractionPolicy::Truncate,
        }
    }
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
