//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use jacoco_summary::{
    AggregateScope, ReportExtractor, Thresholds, DEFAULT_PACKAGE_PREFIX, DEFAULT_REPORT_PATH,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Map `--quiet` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when stderr is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// JaCoCo XML report to read
    pub report_path: PathBuf,
    /// Prefix stripped from package names
    pub package_prefix: String,
    /// Rendered output format
    pub format: OutputFormat,
    /// Optional file receiving a copy of the output
    pub output_path: Option<PathBuf>,
    /// Package status thresholds
    pub thresholds: Thresholds,
    /// Aggregate counter scope
    pub scope: AggregateScope,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            package_prefix: DEFAULT_PACKAGE_PREFIX.to_string(),
            format: OutputFormat::Markdown,
            output_path: None,
            thresholds: Thresholds::default(),
            scope: AggregateScope::Document,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the report path
    #[must_use]
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Set the package prefix
    #[must_use]
    pub fn with_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.package_prefix = prefix.into();
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output file
    #[must_use]
    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    /// Set thresholds
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set aggregate scope
    #[must_use]
    pub const fn with_scope(mut self, scope: AggregateScope) -> Self {
        self.scope = scope;
        self
    }

    /// Reject settings that cannot produce a meaningful report
    pub fn validate(&self) -> CliResult<()> {
        if !self.thresholds.is_valid() {
            return Err(CliError::invalid_argument(format!(
                "thresholds must satisfy 0 <= fair ({}) <= good ({}) <= 100",
                self.thresholds.fair, self.thresholds.good
            )));
        }
        Ok(())
    }

    /// Extractor configured from these settings
    #[must_use]
    pub fn extractor(&self) -> ReportExtractor {
        ReportExtractor::new()
            .with_package_prefix(self.package_prefix.clone())
            .with_scope(self.scope)
    }
}
