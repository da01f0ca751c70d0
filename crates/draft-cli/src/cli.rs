//! CLI argument definitions for the draft ratings viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use draft_cli::render::OutputFormat;
use draft_model::{Archetype, Color as ManaColor};

#[derive(Parser)]
#[command(
    name = "draft-viewer",
    version,
    about = "Browse card draft ratings exports",
    long_about = "Search and sort card ratings exports.\n\n\
                  Reads card-ratings-<date>.csv, per-archetype card-ratings-<date>(<CODE>).csv\n\
                  and colors-<date>.csv files from a data directory."
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

    /// Config file (default: ./draft-viewer.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show card ratings for all colors, one color or one archetype.
    Cards(CardsArgs),

    /// Show the two-color archetype win rates.
    Archetypes(ArchetypesArgs),

    /// List the two-color combinations.
    Combos(CombosArgs),
}

/// Where the exports live.
#[derive(Args)]
pub struct DataArgs {
    /// Directory holding the CSV exports.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Snapshot date (YYYY-MM-DD). Defaults to the latest one found.
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Treat blank CSV fields as absent, so blank win rates show as missing.
    #[arg(long = "empty-is-absent")]
    pub empty_is_absent: bool,
}

#[derive(Args)]
pub struct CardsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Single color (W, U, B, R, G or its name).
    #[arg(long = "mana", value_name = "COLOR", conflicts_with = "archetype")]
    pub mana: Option<ManaColor>,

    /// Two-color archetype code, e.g. WR or RW.
    #[arg(long = "archetype", value_name = "CODE")]
    pub archetype: Option<Archetype>,

    /// Case-insensitive substring of the card name.
    #[arg(long = "search", value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Column to sort by. Repeat to toggle the direction, like clicking a header twice.
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ArchetypesArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Case-insensitive substring of the archetype name.
    #[arg(long = "search", value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Column to sort by. Repeat to toggle the direction.
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct CombosArgs {
    /// Only combinations containing this color.
    #[arg(long = "mana", value_name = "COLOR")]
    pub mana: Option<ManaColor>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
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
