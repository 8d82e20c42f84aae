//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use jacoco_summary::{DEFAULT_PACKAGE_PREFIX, DEFAULT_REPORT_PATH};
use std::path::PathBuf;

/// Render a JaCoCo XML coverage report as a markdown summary
#[derive(Parser, Debug)]
#[command(name = "jacoco-summary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JaCoCo XML report to summarize
    #[arg(default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Prefix removed from package names in the package table
    #[arg(long, default_value = DEFAULT_PACKAGE_PREFIX)]
    pub strip_prefix: String,

    /// Output format
    #[arg(short, long, default_value = "markdown")]
    pub format: FormatArg,

    /// Also write the rendered output to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum package coverage shown as green
    #[arg(long, default_value = "80")]
    pub good_threshold: f64,

    /// Minimum package coverage shown as yellow
    #[arg(long, default_value = "50")]
    pub fair_threshold: f64,

    /// Counters used for the overall table
    #[arg(long, default_value = "document")]
    pub scope: ScopeArg,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Markdown tables
    #[default]
    Markdown,
    /// JSON summary
    Json,
}

/// Aggregate scope argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ScopeArg {
    /// Every counter in the report, last one of each kind wins
    #[default]
    Document,
    /// Only report-level counters
    Report,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => Self::Markdown,
            FormatArg::Json => Self::Json,
        }
    }
}

impl From<ScopeArg> for jacoco_summary::AggregateScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Document => Self::Document,
            ScopeArg::Report => Self::Report,
        }
    }
}
