//! Summary command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::StatusReporter;
use std::path::Path;
use tracing::{debug, info};

/// Load the configured report and render it in the configured format
pub fn render_report(config: &CliConfig) -> CliResult<String> {
    config.validate()?;

    info!(path = %config.report_path.display(), "reading coverage report");
    let summary = config.extractor().extract_file(&config.report_path)?;
    debug!(
        kinds = summary.metrics.len(),
        packages = summary.packages.len(),
        format = ?config.format,
        "rendering summary"
    );

    config.format.render(&summary, config.thresholds)
}

/// Execute the summary command: print the report and optionally save a copy
pub fn execute_summary(config: &CliConfig, reporter: &StatusReporter) -> CliResult<()> {
    let rendered = render_report(config)?;

    if let Some(ref path) = config.output_path {
        write_output(path, &rendered)?;
        reporter.success(&format!("Summary written to {}", path.display()));
    }

    println!("{rendered}");
    Ok(())
}

/// Write rendered output, creating parent directories as needed
pub fn write_output(path: &Path, rendered: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::output(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }

    std::fs::write(path, rendered)
        .map_err(|e| CliError::output(format!("Failed to write {}: {e}", path.display())))
}
