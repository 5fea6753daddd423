//! CLI argument definitions for the storefront host.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "storefront",
    version,
    about = "MATHEORY storefront - inspect catalogs and replay shopping sessions",
    long_about = "Inspect storefront catalogs and replay scripted shopping sessions.\n\n\
                  Sessions run against an in-memory view port with a virtual clock, so\n\
                  page transitions settle instantly and deterministically."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Settings file (default: the per-user config directory).
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the products of a catalog file.
    Catalog(CatalogArgs),

    /// Replay a JSON script of messages against a catalog.
    Run(RunArgs),

    /// Print the effective settings as TOML.
    Settings,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Path to the session script (a JSON array of steps).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
