//! jacoco-summary: JaCoCo XML coverage report to markdown
//!
//! ## Usage
//!
//! ```bash
//! jacoco-summary                                   # target/site/jacoco/jacoco.xml
//! jacoco-summary build/reports/jacoco.xml          # explicit report
//! jacoco-summary --format json -o coverage.json    # JSON, saved to a file
//! ```

use clap::Parser;
use jacoco_summary::Thresholds;
use jacoco_summary_cli::{
    handlers::summary::execute_summary, logging::init_logging, Cli, CliConfig, ColorChoice,
    StatusReporter, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = build_config(Cli::parse());

    let use_color = config.color.should_color();
    init_logging(config.verbosity, use_color);

    let reporter = StatusReporter::new(use_color, config.verbosity.is_quiet());
    match execute_summary(&config, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
        .with_report_path(cli.report)
        .with_package_prefix(cli.strip_prefix)
        .with_format(cli.format.into())
        .with_output_path(cli.output)
        .with_thresholds(Thresholds::new(cli.good_threshold, cli.fair_threshold))
        .with_scope(cli.scope.into())
}
