//! CLI argument definitions for the gas planner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tecgas_report::PageSize;

#[derive(Parser)]
#[command(
    name = "tecgas",
    version,
    about = "Tec40/45 gas planning sheet",
    long_about = "Fill in, recalculate and export Tec40/45 gas planning sheets.\n\n\
                  Plans are stored as JSON files keyed by section name. Fields are\n\
                  addressed as SECTION/LABEL or SECTION/ROW/COLUMN, e.g.\n\
                  \"General Info/Max Depth\" or \"Deco Stops/1/Time\"."
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
    /// List the sheet's sections in order.
    Sections,

    /// Print every section of a plan (a blank sheet when no plan is given).
    Show(ShowArgs),

    /// Edit fields of a plan, recalculate and save it.
    Set(SetArgs),

    /// Reset a plan to the blank sheet and save it.
    Clear(ClearArgs),

    /// Export a plan as a printable document.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Plan file to display.
    #[arg(value_name = "PLAN")]
    pub plan: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SetArgs {
    /// Plan file to update.
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// Assignments of the form FIELD=VALUE, applied left to right.
    #[arg(value_name = "FIELD=VALUE", required = true)]
    pub assignments: Vec<String>,

    /// Start from a blank sheet instead of reading PLAN.
    #[arg(long = "new")]
    pub new: bool,
}

#[derive(Parser)]
pub struct ClearArgs {
    /// Plan file to clear.
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Plan file to export.
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// Output file for the printable document.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Paper size.
    #[arg(long = "page", value_enum, default_value = "letter")]
    pub page: PageArg,

    /// Document title (defaults to the plan file name).
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Leave out the generation timestamp.
    #[arg(long = "no-timestamp")]
    pub no_timestamp: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PageArg {
    Letter,
    A4,
}

impl From<PageArg> for PageSize {
    fn from(value: PageArg) -> Self {
        match value {
            PageArg::Letter => PageSize::Letter,
            PageArg::A4 => PageSize::A4,
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
