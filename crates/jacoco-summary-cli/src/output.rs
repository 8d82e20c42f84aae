//! Output formatting and status reporting

use console::{style, Term};
use jacoco_summary::{CoverageSummary, MarkdownFormatter, Thresholds};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Output format for the rendered summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Markdown tables for PR comments
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Render a summary in this format
    pub fn render(self, summary: &CoverageSummary, thresholds: Thresholds) -> CliResult<String> {
        match self {
            Self::Markdown => Ok(MarkdownFormatter::from_summary(summary)
                .with_thresholds(thresholds)
                .generate()),
            Self::Json => summary
                .to_json()
                .map_err(|e| CliError::output(format!("JSON serialization failed: {e}"))),
        }
    }
}

/// Status lines on stderr, kept off stdout so the report can be piped
#[derive(Debug)]
pub struct StatusReporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl StatusReporter {
    /// Create a new status reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.success_line(message));
    }

    /// Print a failure message, even in quiet mode
    pub fn failure(&self, message: &str) {
        let _ = self.term.write_line(&self.failure_line(message));
    }

    fn success_line(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {message}", style("✓").green().bold())
        } else {
            format!("OK {message}")
        }
    }

    fn failure_line(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {message}", style("✗").red().bold())
        } else {
            format!("Error: {message}")
        }
    }
}
