//! CLI argument definitions for the unit crosswalk.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "xwalk",
    version,
    about = "Link regulatory emission units to market generators",
    long_about = "Link boiler/unit records from the regulatory emissions inventory to generator \
                  records from the electricity-market inventory.\n\n\
                  Records are paired by facility key and a cascade of progressively looser \
                  identifier rules. Every eligible unit appears in the crosswalk with the \
                  phase that matched it or the reason it stayed unmatched."
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
    /// Build the crosswalk for one reporting year.
    Link(LinkArgs),

    /// List the cascade phases and their identifier rules.
    Phases,
}

#[derive(Parser)]
pub struct LinkArgs {
    /// Regulatory unit inventory (CSV).
    #[arg(long = "regulatory", value_name = "CSV")]
    pub regulatory: Option<PathBuf>,

    /// Market generator inventory (CSV).
    #[arg(long = "market", value_name = "CSV")]
    pub market: Option<PathBuf>,

    /// Facility-key correction table (CSV with eia_plant_id, camd_plant_id).
    #[arg(long = "corrections", value_name = "CSV")]
    pub corrections: Option<PathBuf>,

    /// Target reporting year.
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<i32>,

    /// Output directory for generated files (default: ./output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file supplying any of the options above; flags take precedence.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Leading digits of six-digit facility keys reserved for non-grid plants.
    #[arg(long = "non-grid-prefix", value_name = "DIGITS")]
    pub non_grid_prefix: Option<String>,

    /// Run the cascade and print the summary without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
